//! Core state container for the visualizer front-end.
//!
//! The [`App`] is owned by the presentation thread and is the only writer of
//! render state. Search runs execute on worker threads and reach the app as
//! [`RunEvent`]s that are applied one per frame.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use searchviz_steps::{Algorithm, RunOutcome, Snapshot};
use throbber_widgets_tui::ThrobberState;

use super::input::TargetInput;
use crate::dataset::DatasetGenerator;
use crate::theme::Theme;
use crate::worker::{RunEvent, RunHandle};

pub const MIN_DELAY: Duration = Duration::from_millis(100);
pub const MAX_DELAY: Duration = Duration::from_millis(1000);
pub const DELAY_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub level: StatusLevel,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Info,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Warning,
        }
    }
}

/// What the user did during a session, reported after the terminal is restored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub runs_started: usize,
    pub outcomes: Vec<RunOutcome>,
}

/// Aggregate state of the visualizer.
pub struct App {
    pub(crate) data: Option<Arc<[i64]>>,
    pub(crate) generator: DatasetGenerator,
    pub(crate) algorithm: Algorithm,
    pub(crate) target: TargetInput,
    pub(crate) delay: Duration,
    pub(crate) theme: Theme,
    pub(crate) snapshot: Option<Snapshot<i64>>,
    pub(crate) run: Option<RunHandle>,
    pub(crate) active: Option<(Algorithm, i64)>,
    pub(crate) pending: VecDeque<RunEvent>,
    pub(crate) last_outcome: Option<RunOutcome>,
    pub(crate) status: Status,
    pub(crate) show_log: bool,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) summary: SessionSummary,
}

impl App {
    pub fn new(generator: DatasetGenerator) -> Self {
        crate::logging::initialize();
        Self {
            data: None,
            generator,
            algorithm: Algorithm::default(),
            target: TargetInput::new(0),
            delay: Duration::from_millis(500),
            theme: Theme::default(),
            snapshot: None,
            run: None,
            active: None,
            pending: VecDeque::new(),
            last_outcome: None,
            status: Status::info("Press g to generate data"),
            show_log: false,
            throbber_state: ThrobberState::default(),
            summary: SessionSummary::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn set_target(&mut self, target: i64) {
        self.target.set(target);
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    #[must_use]
    pub fn data(&self) -> Option<&[i64]> {
        self.data.as_deref()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot<i64>> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<RunOutcome> {
        self.last_outcome
    }

    /// Drain worker events into the queue and apply the oldest one.
    ///
    /// Only one event is applied per call so every snapshot stays on screen
    /// for at least one frame, however fast the worker produces them.
    pub fn pump_run_events(&mut self) {
        let mut disconnected = false;
        if let Some(run) = &self.run {
            loop {
                match run.try_recv() {
                    Ok(event) => self.pending.push_back(event),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        if disconnected && self.pending.is_empty() {
            self.run = None;
            self.status = Status::warning("Search worker stopped unexpectedly");
        }

        if let Some(event) = self.pending.pop_front() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: RunEvent) {
        match event {
            RunEvent::Step(snapshot) => self.snapshot = Some(snapshot),
            RunEvent::Finished(outcome) => {
                self.run = None;
                self.last_outcome = Some(outcome);
                self.summary.outcomes.push(outcome);
                self.status = self.describe_outcome(outcome);
            }
            RunEvent::Failed(err) => {
                self.run = None;
                self.status = Status::warning(format!("Search failed: {err}"));
            }
        }
    }

    fn describe_outcome(&self, outcome: RunOutcome) -> Status {
        let (algorithm, target) = self.active.unwrap_or((self.algorithm, 0));
        match outcome {
            RunOutcome::Found { index, steps } => Status::info(format!(
                "{algorithm} found {target} at index {index} after {steps} steps"
            )),
            RunOutcome::Exhausted { steps } => Status::info(format!(
                "{algorithm} did not find {target} ({steps} steps)"
            )),
            RunOutcome::Cancelled { steps } => {
                Status::warning(format!("Search cancelled after {steps} steps"))
            }
        }
    }

    /// Stop any in-flight run, discarding its undelivered events.
    pub(crate) fn stop_run(&mut self) -> bool {
        self.pending.clear();
        match self.run.take() {
            Some(run) => {
                run.cancel();
                true
            }
            None => false,
        }
    }

    pub(crate) fn into_summary(mut self) -> SessionSummary {
        self.stop_run();
        std::mem::take(&mut self.summary)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop_run();
    }
}
