use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod dataset;
mod search;
mod ui;

use dataset::DatasetSection;
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    search: SearchSection,
    dataset: DatasetSection,
    ui: UiSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.search.apply_cli_overrides(cli);
        self.dataset.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            algorithm: detect_source(
                cli.algorithm.is_some(),
                self.search.algorithm.is_some(),
                "SEARCHVIZ__SEARCH__ALGORITHM",
                "--algorithm",
                "search.algorithm",
            ),
            dataset_len: detect_source(
                cli.len.is_some(),
                self.dataset.len.is_some(),
                "SEARCHVIZ__DATASET__LEN",
                "--len",
                "dataset.len",
            ),
            dataset_min: detect_source(
                cli.min.is_some(),
                self.dataset.min.is_some(),
                "SEARCHVIZ__DATASET__MIN",
                "--min",
                "dataset.min",
            ),
            theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "SEARCHVIZ__UI__THEME",
                "--theme",
                "ui.theme",
            ),
        };

        let search = self.search.resolve(&sources)?;
        let (dataset, warnings) = self.dataset.resolve();
        let (theme_name, theme) = self.ui.resolve(&sources)?;

        let config = ResolvedConfig {
            algorithm: search.algorithm,
            target: search.target,
            delay: search.delay,
            dataset,
            theme_name,
            theme,
            warnings,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
