use searchviz::DatasetError;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    match config.dataset.validate() {
        Ok(()) => Ok(()),
        Err(DatasetError::EmptyRange { min, max }) => Err(ConfigError::invalid(
            "dataset.min",
            min.to_string(),
            sources.source_for_min(),
            format!("must not exceed dataset.max ({max})"),
        )),
        Err(err @ DatasetError::NotEnoughValues { len, .. }) => Err(ConfigError::invalid(
            "dataset.len",
            len.to_string(),
            sources.source_for_len(),
            err.to_string(),
        )),
    }
}
