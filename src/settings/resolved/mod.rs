use std::time::Duration;

use searchviz::{Algorithm, DatasetOptions, Theme};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub algorithm: Algorithm,
    pub target: i64,
    pub delay: Duration,
    pub dataset: DatasetOptions,
    pub theme_name: String,
    pub theme: Theme,
    /// Non-fatal adjustments made while resolving, shown to the user.
    pub warnings: Vec<String>,
}

impl ResolvedConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        summary::print_summary(self);
    }
}
