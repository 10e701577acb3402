//! Step emitters for visualising linear and binary search.
//!
//! Each algorithm is exposed as a lazy iterator of immutable [`Snapshot`]s. A
//! snapshot carries the searched sequence together with one [`CellState`] per
//! index, so a presentation layer can paint every step without knowing how the
//! algorithm works. The iterators never sleep; pacing and cancellation live in
//! [`drive`], which reproduces the "notify the sink, then wait" contract on top
//! of any step stream.

mod algorithm;
mod binary;
mod drive;
mod error;
mod linear;
mod snapshot;

pub use algorithm::{Algorithm, Steps};
pub use binary::BinarySearch;
pub use drive::{CancelToken, RunOutcome, drive};
pub use error::{ParseAlgorithmError, StepError};
pub use linear::LinearSearch;
pub use snapshot::{Bounds, CellState, Phase, Snapshot};

/// Item type produced by every step emitter.
pub type StepResult<T> = Result<Snapshot<T>, StepError>;
