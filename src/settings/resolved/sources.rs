use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

/// Where the settings that can fail validation came from.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) algorithm: Option<SettingSource>,
    pub(crate) dataset_len: Option<SettingSource>,
    pub(crate) dataset_min: Option<SettingSource>,
    pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_algorithm(&self) -> SettingSource {
        self.algorithm
            .clone()
            .unwrap_or(SettingSource::ConfigKey("search.algorithm"))
    }

    pub(crate) fn source_for_len(&self) -> SettingSource {
        self.dataset_len
            .clone()
            .unwrap_or(SettingSource::ConfigKey("dataset.len"))
    }

    pub(crate) fn source_for_min(&self) -> SettingSource {
        self.dataset_min
            .clone()
            .unwrap_or(SettingSource::ConfigKey("dataset.min"))
    }

    pub(crate) fn source_for_theme(&self) -> SettingSource {
        self.theme
            .clone()
            .unwrap_or(SettingSource::ConfigKey("ui.theme"))
    }
}
