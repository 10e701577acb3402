use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::StepResult;
use crate::binary::BinarySearch;
use crate::error::ParseAlgorithmError;
use crate::linear::LinearSearch;

/// The search algorithms that can be stepped through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Linear,
    Binary,
}

impl Algorithm {
    pub const ALL: [Self; 2] = [Self::Linear, Self::Binary];

    /// Identifier accepted by [`FromStr`] and configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear Search",
            Self::Binary => "Binary Search",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Linear => Self::Binary,
            Self::Binary => Self::Linear,
        }
    }

    /// Upper bound on probe snapshots for a sequence of `len` elements.
    ///
    /// The terminal snapshot comes on top of this.
    #[must_use]
    pub const fn max_probes(self, len: usize) -> usize {
        match self {
            Self::Linear => len,
            Self::Binary => (usize::BITS - len.leading_zeros()) as usize,
        }
    }

    /// Start a run of this algorithm over `values`.
    pub fn steps<T>(self, values: impl Into<Arc<[T]>>, target: T) -> Steps<T> {
        match self {
            Self::Linear => Steps::Linear(LinearSearch::new(values, target)),
            Self::Binary => Steps::Binary(BinarySearch::new(values, target)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "linear" | "linear search" | "linear-search" => Ok(Self::Linear),
            "binary" | "binary search" | "binary-search" => Ok(Self::Binary),
            other => Err(ParseAlgorithmError(other.to_string())),
        }
    }
}

/// Step stream of either algorithm.
#[derive(Debug, Clone)]
pub enum Steps<T> {
    Linear(LinearSearch<T>),
    Binary(BinarySearch<T>),
}

impl<T: PartialOrd> Iterator for Steps<T> {
    type Item = StepResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Linear(search) => search.next(),
            Self::Binary(search) => search.next(),
        }
    }
}

impl<T: PartialOrd> FusedIterator for Steps<T> {}
