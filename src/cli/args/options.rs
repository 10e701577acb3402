use clap::ValueEnum;

/// Algorithms selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum AlgorithmArg {
    Linear,
    Binary,
}

impl AlgorithmArg {
    /// Return the identifier consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            AlgorithmArg::Linear => "linear",
            AlgorithmArg::Binary => "binary",
        }
    }
}

/// Output formats supported by headless runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
