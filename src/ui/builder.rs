use std::time::Duration;

use anyhow::Result;
use searchviz_steps::Algorithm;

use super::App;
use super::state::SessionSummary;
use crate::dataset::DatasetGenerator;
use crate::theme::Theme;

/// A small builder for configuring the interactive visualizer before the
/// terminal is taken over.
pub struct Visualizer {
    generator: DatasetGenerator,
    algorithm: Algorithm,
    target: i64,
    delay: Duration,
    theme: Option<Theme>,
    generate_on_start: bool,
}

impl Visualizer {
    /// Create a visualizer that draws its datasets from `generator`.
    pub fn new(generator: DatasetGenerator) -> Self {
        Self {
            generator,
            algorithm: Algorithm::default(),
            target: 0,
            delay: Duration::from_millis(500),
            theme: None,
            generate_on_start: false,
        }
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = target;
        self
    }

    /// Pause between probes. Values outside the slider range are kept as given.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Generate a dataset before the first frame instead of waiting for `g`.
    #[must_use]
    pub fn with_initial_data(mut self, generate: bool) -> Self {
        self.generate_on_start = generate;
        self
    }

    /// Build the [`App`] without starting the terminal loop.
    pub fn into_app(self) -> App {
        let mut app = App::new(self.generator);
        app.set_algorithm(self.algorithm);
        app.set_target(self.target);
        app.set_delay(self.delay);
        if let Some(theme) = self.theme {
            app.set_theme(theme);
        }
        if self.generate_on_start {
            app.generate_data();
        }
        app
    }

    /// Run the interactive session until the user quits.
    pub fn run(self) -> Result<SessionSummary> {
        self.into_app().run()
    }
}
