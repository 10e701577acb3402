use std::cmp::Ordering;

use thiserror::Error;

/// Failures surfaced while stepping through a search.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StepError {
    /// The target could not be ordered against the element at `index`.
    #[error("target cannot be compared with the element at index {index}")]
    TypeConflict { index: usize },

    /// A step stream stopped before yielding a terminal snapshot.
    #[error("step stream ended after {steps} steps without a terminal snapshot")]
    Incomplete { steps: usize },
}

/// Raised when an algorithm name does not match a known emitter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown algorithm '{0}' (expected 'linear' or 'binary')")]
pub struct ParseAlgorithmError(pub String);

/// Order `value` against `target`, mapping incomparable pairs to a conflict at `index`.
pub(crate) fn compare<T: PartialOrd>(
    value: &T,
    target: &T,
    index: usize,
) -> Result<Ordering, StepError> {
    value
        .partial_cmp(target)
        .ok_or(StepError::TypeConflict { index })
}
