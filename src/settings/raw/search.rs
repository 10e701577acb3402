use std::time::Duration;

use searchviz::Algorithm;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

const DEFAULT_DELAY_MS: u64 = 500;

/// Search configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
    pub(super) algorithm: Option<String>,
    pub(super) target: Option<i64>,
    pub(super) delay_ms: Option<u64>,
}

pub(super) struct SearchResolution {
    pub(super) algorithm: Algorithm,
    pub(super) target: i64,
    pub(super) delay: Duration,
}

impl SearchSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(algorithm) = cli.algorithm {
            self.algorithm = Some(algorithm.as_str().to_string());
        }
        if let Some(target) = cli.target {
            self.target = Some(target);
        }
        if let Some(delay_ms) = cli.delay_ms {
            self.delay_ms = Some(delay_ms);
        }
    }

    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<SearchResolution, ConfigError> {
        let algorithm = match self.algorithm {
            Some(name) => name.parse::<Algorithm>().map_err(|err| {
                ConfigError::invalid(
                    "search.algorithm",
                    name.clone(),
                    sources.source_for_algorithm(),
                    err.to_string(),
                )
            })?,
            None => Algorithm::default(),
        };

        Ok(SearchResolution {
            algorithm,
            target: self.target.unwrap_or(0),
            delay: Duration::from_millis(self.delay_ms.unwrap_or(DEFAULT_DELAY_MS)),
        })
    }
}
