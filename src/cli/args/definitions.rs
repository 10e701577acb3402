use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{AlgorithmArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `searchviz` binary.
#[derive(Parser, Debug)]
#[command(
    name = "searchviz",
    version,
    long_version = long_version(),
    about = "Step through linear and binary search in the terminal",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "SEARCHVIZ_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'a',
        long,
        value_enum,
        help = "Search algorithm to run (default: linear)"
    )]
    pub(crate) algorithm: Option<AlgorithmArg>,
    #[arg(
        short = 't',
        long,
        value_name = "NUM",
        allow_negative_numbers = true,
        help = "Value to search for (default: 0)"
    )]
    pub(crate) target: Option<i64>,
    #[arg(
        short = 'd',
        long = "delay-ms",
        value_name = "MS",
        help = "Pause after each comparison in milliseconds (default: 500)"
    )]
    pub(crate) delay_ms: Option<u64>,
    #[arg(
        long,
        value_name = "NUM",
        help = "Number of values to generate (default: 15)"
    )]
    pub(crate) len: Option<usize>,
    #[arg(
        long,
        value_name = "NUM",
        allow_negative_numbers = true,
        help = "Smallest value that may be generated (default: 1)"
    )]
    pub(crate) min: Option<i64>,
    #[arg(
        long,
        value_name = "NUM",
        allow_negative_numbers = true,
        help = "Largest value that may be generated (default: 99)"
    )]
    pub(crate) max: Option<i64>,
    #[arg(
        long,
        value_name = "SEED",
        help = "Seed the generator for reproducible data (default: random)"
    )]
    pub(crate) seed: Option<u64>,
    #[arg(
        long,
        value_delimiter = ',',
        value_name = "NUM",
        allow_hyphen_values = true,
        help = "Comma-separated values to search instead of generated data (default: none)"
    )]
    pub(crate) values: Option<Vec<i64>>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: classic)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        long,
        help = "Run without the terminal UI and print every step (default: disabled)"
    )]
    pub(crate) headless: bool,
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
    pub(crate) output: OutputFormat,
}
