use anyhow::{Context, Result};
use searchviz::transcript::{self, Transcript};
use searchviz::{DatasetGenerator, SessionSummary, Visualizer};

use crate::settings::ResolvedConfig;

/// Coordinates turning resolved configuration into a run.
pub(crate) struct SearchWorkflow {
    config: ResolvedConfig,
    generator: DatasetGenerator,
}

impl SearchWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let generator = DatasetGenerator::new(config.dataset.clone())
            .context("failed to prepare the dataset generator")?;
        Ok(Self { config, generator })
    }

    /// Drive the configured algorithm once without the terminal UI.
    pub(crate) fn run_headless(mut self) -> Result<Transcript> {
        let values = self.generator.generate();
        transcript::record(
            self.config.algorithm,
            values,
            self.config.target,
            self.config.delay,
        )
        .context("search run failed")
    }

    /// Hand the terminal to the interactive visualizer.
    pub(crate) fn run_interactive(self) -> Result<SessionSummary> {
        let ResolvedConfig {
            algorithm,
            target,
            delay,
            dataset,
            theme,
            ..
        } = self.config;

        Visualizer::new(self.generator)
            .with_algorithm(algorithm)
            .with_target(target)
            .with_delay(delay)
            .with_theme(theme)
            .with_initial_data(dataset.values.is_some())
            .run()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use searchviz::{Algorithm, DatasetOptions, RunOutcome, default_theme};

    use super::*;

    fn config(dataset: DatasetOptions) -> ResolvedConfig {
        ResolvedConfig {
            algorithm: Algorithm::Binary,
            target: 12,
            delay: Duration::ZERO,
            dataset,
            theme_name: "classic".into(),
            theme: default_theme(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn headless_run_uses_the_configured_values() {
        let workflow = SearchWorkflow::from_config(config(DatasetOptions {
            values: Some(vec![2, 5, 8, 12, 19, 25]),
            ..DatasetOptions::default()
        }))
        .expect("valid config");

        let transcript = workflow.run_headless().expect("run completes");
        assert_eq!(transcript.values, vec![2, 5, 8, 12, 19, 25]);
        assert_eq!(transcript.outcome, RunOutcome::Found { index: 3, steps: 4 });
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let options = DatasetOptions {
            seed: Some(7),
            ..DatasetOptions::default()
        };
        let first = SearchWorkflow::from_config(config(options.clone()))
            .and_then(SearchWorkflow::run_headless)
            .expect("run completes");
        let second = SearchWorkflow::from_config(config(options))
            .and_then(SearchWorkflow::run_headless)
            .expect("run completes");
        assert_eq!(first.values, second.values);
        assert_eq!(first.values.len(), 15);
        assert!(first.values.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
