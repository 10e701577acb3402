//! Demonstration datasets: sorted samples of distinct integers.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use thiserror::Error;

pub const DEFAULT_LEN: usize = 15;
pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 99;

/// Shape of the data produced by [`DatasetGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetOptions {
    pub len: usize,
    pub min: i64,
    pub max: i64,
    /// Fixes the sample sequence for reproducible sessions.
    pub seed: Option<u64>,
    /// Explicit values used verbatim (sorted) instead of sampling.
    pub values: Option<Vec<i64>>,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: None,
            values: None,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("dataset range {min}..={max} is empty")]
    EmptyRange { min: i64, max: i64 },

    #[error("cannot draw {len} distinct values from {min}..={max} ({available} available)")]
    NotEnoughValues {
        len: usize,
        min: i64,
        max: i64,
        available: u128,
    },
}

impl DatasetOptions {
    /// Check that sampling can satisfy the requested shape.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.values.is_some() {
            return Ok(());
        }
        if self.min > self.max {
            return Err(DatasetError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        let available = self.span();
        if self.len as u128 > available {
            return Err(DatasetError::NotEnoughValues {
                len: self.len,
                min: self.min,
                max: self.max,
                available,
            });
        }
        Ok(())
    }

    fn span(&self) -> u128 {
        (i128::from(self.max) - i128::from(self.min) + 1) as u128
    }
}

/// Produces fresh datasets on demand, keeping its RNG between calls.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    options: DatasetOptions,
    rng: StdRng,
}

impl DatasetGenerator {
    pub fn new(options: DatasetOptions) -> Result<Self, DatasetError> {
        options.validate()?;
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { options, rng })
    }

    #[must_use]
    pub fn options(&self) -> &DatasetOptions {
        &self.options
    }

    /// Return a new ascending dataset.
    pub fn generate(&mut self) -> Arc<[i64]> {
        let mut values = match &self.options.values {
            Some(values) => values.clone(),
            None => self.sample(),
        };
        values.sort_unstable();
        values.into()
    }

    fn sample(&mut self) -> Vec<i64> {
        let span = usize::try_from(self.options.span()).unwrap_or(usize::MAX);
        let min = i128::from(self.options.min);
        index::sample(&mut self.rng, span, self.options.len)
            .into_iter()
            .map(|offset| (min + offset as i128) as i64)
            .collect()
    }
}

/// Whether `values` are already in ascending order.
#[must_use]
pub fn is_ascending(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
