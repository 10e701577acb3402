use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info, warn};
use searchviz_steps::{Algorithm, CancelToken, RunOutcome, Snapshot, StepError, drive};

/// Everything a worker needs to execute one search run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub algorithm: Algorithm,
    pub values: Arc<[i64]>,
    pub target: i64,
    pub delay: Duration,
}

/// Messages sent from a run worker to the presentation thread, in emission order.
#[derive(Debug, Clone)]
pub enum RunEvent {
    Step(Snapshot<i64>),
    Finished(RunOutcome),
    Failed(StepError),
}

/// Owner side of a running search.
///
/// Dropping the handle cancels the run and waits for the worker to exit.
pub struct RunHandle {
    events: Receiver<RunEvent>,
    cancel: CancelToken,
    thread: Option<JoinHandle<()>>,
}

impl RunHandle {
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn try_recv(&self) -> Result<RunEvent, TryRecvError> {
        self.events.try_recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<RunEvent> {
        self.events.recv_timeout(timeout).ok()
    }
}

impl Drop for RunHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Launch a background worker that drives `request` and forwards every step.
pub fn spawn(request: RunRequest) -> RunHandle {
    let (event_tx, event_rx) = mpsc::channel();
    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();

    let thread = thread::spawn(move || execute(request, &worker_cancel, &event_tx));

    RunHandle {
        events: event_rx,
        cancel,
        thread: Some(thread),
    }
}

fn execute(request: RunRequest, cancel: &CancelToken, events: &Sender<RunEvent>) {
    let RunRequest {
        algorithm,
        values,
        target,
        delay,
    } = request;
    info!(
        "{algorithm} started: target {target}, {} values, {}ms per step",
        values.len(),
        delay.as_millis()
    );

    let result = drive(algorithm.steps(values, target), delay, cancel, |snapshot| {
        debug!("step {}: {:?}", snapshot.step(), snapshot.phase());
        if events.send(RunEvent::Step(snapshot.clone())).is_err() {
            cancel.cancel();
        }
    });

    let event = match result {
        Ok(outcome) => {
            info!("{algorithm} finished: {outcome:?}");
            RunEvent::Finished(outcome)
        }
        Err(err) => {
            warn!("{algorithm} failed: {err}");
            RunEvent::Failed(err)
        }
    };
    let _ = events.send(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchviz_steps::Phase;

    fn request(algorithm: Algorithm, target: i64, delay: Duration) -> RunRequest {
        RunRequest {
            algorithm,
            values: Arc::from(vec![2, 5, 8, 12, 19, 25]),
            target,
            delay,
        }
    }

    fn collect(handle: &RunHandle) -> Vec<RunEvent> {
        let mut events = Vec::new();
        while let Some(event) = handle.recv_timeout(Duration::from_secs(2)) {
            let finished = matches!(event, RunEvent::Finished(_) | RunEvent::Failed(_));
            events.push(event);
            if finished {
                break;
            }
        }
        events
    }

    #[test]
    fn steps_arrive_in_emission_order() {
        let handle = spawn(request(Algorithm::Binary, 12, Duration::ZERO));
        let events = collect(&handle);

        let steps: Vec<usize> = events
            .iter()
            .filter_map(|event| match event {
                RunEvent::Step(snapshot) => Some(snapshot.step()),
                _ => None,
            })
            .collect();
        assert_eq!(steps, vec![1, 2, 3, 4]);
        assert!(matches!(
            events.last(),
            Some(RunEvent::Finished(RunOutcome::Found { index: 3, steps: 4 }))
        ));
    }

    #[test]
    fn cancelling_stops_a_slow_run() {
        let handle = spawn(request(Algorithm::Linear, 25, Duration::from_secs(5)));
        let first = handle.recv_timeout(Duration::from_secs(2));
        assert!(matches!(
            first,
            Some(RunEvent::Step(ref snapshot)) if snapshot.phase() == Phase::Probe { index: 0, bounds: None }
        ));

        handle.cancel();
        let events = collect(&handle);
        assert!(matches!(
            events.last(),
            Some(RunEvent::Finished(RunOutcome::Cancelled { steps: 1 }))
        ));
    }

    #[test]
    fn dropping_the_handle_joins_the_worker() {
        let handle = spawn(request(Algorithm::Linear, 25, Duration::from_secs(5)));
        assert!(handle.recv_timeout(Duration::from_secs(2)).is_some());
        drop(handle);
    }
}
