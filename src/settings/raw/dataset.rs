use searchviz::DatasetOptions;
use searchviz::dataset::is_ascending;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Dataset shape as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DatasetSection {
    pub(super) len: Option<usize>,
    pub(super) min: Option<i64>,
    pub(super) max: Option<i64>,
    pub(super) seed: Option<u64>,
    pub(super) values: Option<Vec<i64>>,
}

impl DatasetSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(len) = cli.len {
            self.len = Some(len);
        }
        if let Some(min) = cli.min {
            self.min = Some(min);
        }
        if let Some(max) = cli.max {
            self.max = Some(max);
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(values) = &cli.values {
            self.values = Some(values.clone());
        }
    }

    /// Fill defaults and sort explicit values, returning any warnings raised.
    pub(super) fn resolve(self) -> (DatasetOptions, Vec<String>) {
        let defaults = DatasetOptions::default();
        let mut warnings = Vec::new();

        let values = self.values.map(|mut values| {
            if !is_ascending(&values) {
                let message =
                    "dataset.values were not in ascending order; they have been sorted".to_string();
                warnings.push(message);
                values.sort_unstable();
            }
            values
        });

        let options = DatasetOptions {
            len: self.len.unwrap_or(defaults.len),
            min: self.min.unwrap_or(defaults.min),
            max: self.max.unwrap_or(defaults.max),
            seed: self.seed,
            values,
        };
        (options, warnings)
    }
}
