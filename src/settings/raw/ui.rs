use searchviz::Theme;
use searchviz::theme;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "classic";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
    pub(super) theme: Option<String>,
}

impl UiSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(theme) = &cli.theme {
            self.theme = Some(theme.clone());
        }
    }

    /// Look up the configured theme, returning its name and palette.
    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<(String, Theme), ConfigError> {
        let name = self.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
        match theme::by_name(&name) {
            Some(theme) => Ok((name, theme)),
            None => {
                let available: Vec<&str> = theme::names().collect();
                Err(ConfigError::invalid(
                    "ui.theme",
                    name,
                    sources.source_for_theme(),
                    format!("unknown theme (available: {})", available.join(", ")),
                ))
            }
        }
    }
}
