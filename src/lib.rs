//! Core crate exports for building and running the `searchviz` terminal
//! visualizer.
//!
//! The step engine lives in the `searchviz-steps` crate and is re-exported
//! here alongside the dataset generator, themes, the background worker and
//! the interactive UI, so embedders can drive a run without digging through
//! the module hierarchy.

pub mod app_dirs;
pub mod dataset;
pub mod logging;
pub mod theme;
pub mod transcript;
pub mod ui;
pub mod worker;

pub use dataset::{DatasetError, DatasetGenerator, DatasetOptions};
pub use searchviz_steps::{
    Algorithm, CancelToken, CellState, Phase, RunOutcome, Snapshot, StepError, drive,
};
pub use theme::{Theme, default_theme};
pub use transcript::Transcript;
pub use ui::{App, SessionSummary, Visualizer};
