use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::StepResult;
use crate::error::compare;
use crate::snapshot::{Phase, Snapshot};

/// Sequential scan emitting one probe per index, then a terminal snapshot.
///
/// The scan stops at the first index equal to the target, so duplicates
/// resolve to the lowest matching index.
#[derive(Debug, Clone)]
pub struct LinearSearch<T> {
    values: Arc<[T]>,
    target: T,
    next: usize,
    probed: Option<usize>,
    emitted: usize,
    done: bool,
}

impl<T> LinearSearch<T> {
    pub fn new(values: impl Into<Arc<[T]>>, target: T) -> Self {
        Self {
            values: values.into(),
            target,
            next: 0,
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

impl<T: PartialOrd> Iterator for LinearSearch<T> {
    type Item = StepResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(index) = self.probed.take() {
            match compare(&self.values[index], &self.target, index) {
                Ok(Ordering::Equal) => return Some(Ok(self.emit(Phase::Found { index }))),
                Ok(_) => {}
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }

        if self.next < self.values.len() {
            let index = self.next;
            self.next += 1;
            self.probed = Some(index);
            return Some(Ok(self.emit(Phase::Probe {
                index,
                bounds: None,
            })));
        }

        Some(Ok(self.emit(Phase::Exhausted)))
    }
}

impl<T: PartialOrd> FusedIterator for LinearSearch<T> {}
