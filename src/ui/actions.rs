use log::{info, warn};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::{DELAY_STEP, MAX_DELAY, MIN_DELAY, Status};
use crate::worker::{self, RunRequest};

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

impl App {
    /// Translate a key press into an application action.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Tab | KeyCode::Char('a') => self.cycle_algorithm(),
            KeyCode::Left => self.adjust_speed(-1),
            KeyCode::Right => self.adjust_speed(1),
            KeyCode::Char('g') => self.generate_data(),
            KeyCode::Enter | KeyCode::Char('s') => self.start_search(),
            KeyCode::Char('c') => self.cancel_search(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('l') => self.show_log = !self.show_log,
            KeyCode::Backspace => self.target.pop(),
            KeyCode::Char(ch) => {
                self.target.push(ch);
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    /// Replace the dataset with a fresh sorted sample.
    pub fn generate_data(&mut self) {
        self.stop_run();
        let values = self.generator.generate();
        info!("generated {} values: {:?}", values.len(), values);
        self.status = Status::info(format!("Generated {} values", values.len()));
        self.data = Some(values);
        self.snapshot = None;
        self.last_outcome = None;
    }

    /// Launch the selected algorithm on a worker thread.
    ///
    /// Refused while another run is in flight so runs never overlap.
    pub fn start_search(&mut self) {
        let Some(values) = self.data.clone() else {
            warn!("start refused: no data");
            self.status = Status::warning("Please generate data first!");
            return;
        };
        if self.is_running() {
            warn!("start refused: a run is already active");
            self.status = Status::warning("A search is already running; press c to cancel it");
            return;
        }
        let target = match self.target.value() {
            Ok(target) => target,
            Err(_) => {
                warn!("start refused: target '{}' is not an integer", self.target.text());
                self.status = Status::warning("Target must be a whole number");
                return;
            }
        };

        self.pending.clear();
        self.snapshot = None;
        self.last_outcome = None;
        self.active = Some((self.algorithm, target));
        self.summary.runs_started += 1;
        self.status = Status::info(format!("Running {} for {target}", self.algorithm));
        self.run = Some(worker::spawn(RunRequest {
            algorithm: self.algorithm,
            values,
            target,
            delay: self.delay,
        }));
    }

    /// Ask the active run to stop after its current step.
    pub fn cancel_search(&mut self) {
        match &self.run {
            Some(run) if !run.is_cancelled() => {
                run.cancel();
                self.status = Status::info("Cancelling...");
            }
            Some(_) => {}
            None => self.status = Status::info("No search is running"),
        }
    }

    /// Clear data, target and chart.
    pub fn reset(&mut self) {
        self.stop_run();
        self.data = None;
        self.snapshot = None;
        self.last_outcome = None;
        self.active = None;
        self.target.set(0);
        info!("visualizer reset");
        self.status = Status::info("Visualizer has been reset!");
    }

    pub fn cycle_algorithm(&mut self) {
        self.algorithm = self.algorithm.next();
    }

    /// Move the per-step delay by `steps` increments within the slider range.
    pub fn adjust_speed(&mut self, steps: i32) {
        let min = MIN_DELAY.as_millis() as i64;
        let max = MAX_DELAY.as_millis() as i64;
        let step = DELAY_STEP.as_millis() as i64;
        // Clamp first so configured delays far outside the slider cannot overflow.
        let current = self.delay.clamp(MIN_DELAY, MAX_DELAY).as_millis() as i64;
        let snapped = (current + step / 2) / step * step;
        let next = (snapped + i64::from(steps) * step).clamp(min, max);
        self.delay = std::time::Duration::from_millis(next.unsigned_abs());
    }
}
