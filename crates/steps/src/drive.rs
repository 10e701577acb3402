use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::StepError;
use crate::snapshot::{Phase, Snapshot};

const PAUSE_SLICE: Duration = Duration::from_millis(10);

/// Cooperative cancellation flag shared between a run and its owner.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// How a driven run came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum RunOutcome {
    Found { index: usize, steps: usize },
    Exhausted { steps: usize },
    Cancelled { steps: usize },
}

impl RunOutcome {
    /// Number of snapshots delivered to the sink.
    #[must_use]
    pub const fn steps(&self) -> usize {
        match *self {
            Self::Found { steps, .. } | Self::Exhausted { steps } | Self::Cancelled { steps } => {
                steps
            }
        }
    }
}

/// Feed every snapshot of `steps` to `sink`, pausing `delay` after each probe.
///
/// The sink is called synchronously before the pause, and no pause follows
/// the terminal snapshot. `cancel` is checked before each step and throughout
/// each pause; a cancelled run stops without delivering further snapshots.
pub fn drive<T, I, F>(
    steps: I,
    delay: Duration,
    cancel: &CancelToken,
    mut sink: F,
) -> Result<RunOutcome, StepError>
where
    I: IntoIterator<Item = Result<Snapshot<T>, StepError>>,
    F: FnMut(&Snapshot<T>),
{
    let mut delivered = 0;

    for step in steps {
        if cancel.is_cancelled() {
            return Ok(RunOutcome::Cancelled { steps: delivered });
        }

        let snapshot = step?;
        sink(&snapshot);
        delivered += 1;

        match snapshot.phase() {
            Phase::Found { index } => {
                return Ok(RunOutcome::Found {
                    index,
                    steps: delivered,
                });
            }
            Phase::Exhausted => return Ok(RunOutcome::Exhausted { steps: delivered }),
            Phase::Probe { .. } => {
                if !pause(delay, cancel) {
                    return Ok(RunOutcome::Cancelled { steps: delivered });
                }
            }
        }
    }

    Err(StepError::Incomplete { steps: delivered })
}

/// Sleep for `delay` in short slices. Returns `false` once cancelled.
fn pause(delay: Duration, cancel: &CancelToken) -> bool {
    let deadline = Instant::now() + delay;
    loop {
        if cancel.is_cancelled() {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep((deadline - now).min(PAUSE_SLICE));
    }
}
