use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::StepResult;
use crate::error::compare;
use crate::snapshot::{Bounds, Phase, Snapshot};

/// Halving search over an ascending sequence.
///
/// Ordering is a caller precondition and is not checked: unsorted input
/// produces wrong answers, never a panic. With duplicate targets the reported
/// index is whichever match the midpoint arithmetic lands on first.
#[derive(Debug, Clone)]
pub struct BinarySearch<T> {
    values: Arc<[T]>,
    target: T,
    left: usize,
    // Exclusive upper bound; the inclusive `right` is `end - 1`.
    end: usize,
    probed: Option<usize>,
    emitted: usize,
    done: bool,
}

impl<T> BinarySearch<T> {
    pub fn new(values: impl Into<Arc<[T]>>, target: T) -> Self {
        let values = values.into();
        let end = values.len();
        Self {
            values,
            target,
            left: 0,
            end,
            probed: None,
            emitted: 0,
            done: false,
        }
    }

    fn emit(&mut self, phase: Phase) -> Snapshot<T> {
        self.emitted += 1;
        if phase.is_terminal() {
            self.done = true;
        }
        Snapshot::new(Arc::clone(&self.values), self.emitted, phase)
    }
}

impl<T: PartialOrd> Iterator for BinarySearch<T> {
    type Item = StepResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(mid) = self.probed.take() {
            match compare(&self.values[mid], &self.target, mid) {
                Ok(Ordering::Equal) => return Some(Ok(self.emit(Phase::Found { index: mid }))),
                Ok(Ordering::Less) => self.left = mid + 1,
                Ok(Ordering::Greater) => self.end = mid,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }

        if self.left < self.end {
            let right = self.end - 1;
            let mid = (self.left + right) / 2;
            self.probed = Some(mid);
            return Some(Ok(self.emit(Phase::Probe {
                index: mid,
                bounds: Some(Bounds {
                    left: self.left,
                    right,
                }),
            })));
        }

        Some(Ok(self.emit(Phase::Exhausted)))
    }
}

impl<T: PartialOrd> FusedIterator for BinarySearch<T> {}
