//! Interactive terminal front-end for `searchviz`.
//!
//! The [`builder`] module exposes the public-facing [`Visualizer`] builder.
//! The remaining submodules implement the event loop, rendering, key handling
//! and the state owned by the presentation thread.

mod actions;
mod builder;
pub mod input;
mod render;
mod runtime;
mod state;

pub use actions::KeyOutcome;
pub use builder::Visualizer;
pub use input::TargetInput;
pub use state::{App, SessionSummary, Status, StatusLevel};
