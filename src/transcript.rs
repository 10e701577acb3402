//! Headless rendition of a run: every snapshot, in order, as text or JSON.

use std::sync::Arc;
use std::time::Duration;

use log::info;
use searchviz_steps::{Algorithm, CancelToken, Phase, RunOutcome, Snapshot, StepError, drive};
use serde::Serialize;

/// Complete record of one driven search.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub algorithm: Algorithm,
    pub target: i64,
    pub values: Vec<i64>,
    pub snapshots: Vec<Snapshot<i64>>,
    pub outcome: RunOutcome,
}

/// Drive `algorithm` over `values`, collecting every snapshot it emits.
pub fn record(
    algorithm: Algorithm,
    values: Arc<[i64]>,
    target: i64,
    delay: Duration,
) -> Result<Transcript, StepError> {
    info!("headless {algorithm} run for {target} over {} values", values.len());
    let mut snapshots = Vec::new();
    let outcome = drive(
        algorithm.steps(Arc::clone(&values), target),
        delay,
        &CancelToken::new(),
        |snapshot| snapshots.push(snapshot.clone()),
    )?;
    info!("headless run finished: {outcome:?}");

    Ok(Transcript {
        algorithm,
        target,
        values: values.to_vec(),
        snapshots,
        outcome,
    })
}

impl Transcript {
    /// One human readable line per snapshot.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.snapshots
            .iter()
            .map(|snapshot| describe(snapshot, self.target))
    }
}

fn describe(snapshot: &Snapshot<i64>, target: i64) -> String {
    let prefix = format!("{:>2} [{}]", snapshot.step(), snapshot.glyphs());
    match snapshot.phase() {
        Phase::Probe { index, bounds } => {
            let value = snapshot.values()[index];
            match bounds {
                Some(bounds) => format!(
                    "{prefix} compare index {index} (value {value}) within {}..={}",
                    bounds.left, bounds.right
                ),
                None => format!("{prefix} compare index {index} (value {value})"),
            }
        }
        Phase::Found { index } => format!("{prefix} found {target} at index {index}"),
        Phase::Exhausted => format!("{prefix} {target} not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Arc<[i64]> {
        Arc::from(vec![2, 5, 8, 12, 19, 25])
    }

    #[test]
    fn binary_lines_show_the_shrinking_range() {
        let transcript =
            record(Algorithm::Binary, scenario(), 12, Duration::ZERO).expect("integers compare");
        let lines: Vec<String> = transcript.lines().collect();
        assert_eq!(
            lines,
            vec![
                " 1 [--?---] compare index 2 (value 8) within 0..=5",
                " 2 [   -?-] compare index 4 (value 19) within 3..=5",
                " 3 [   ?  ] compare index 3 (value 12) within 3..=3",
                " 4 [...*..] found 12 at index 3",
            ]
        );
        assert_eq!(transcript.outcome, RunOutcome::Found { index: 3, steps: 4 });
    }

    #[test]
    fn linear_lines_end_with_not_found() {
        let transcript = record(
            Algorithm::Linear,
            Arc::from(vec![1, 3]),
            2,
            Duration::ZERO,
        )
        .expect("integers compare");
        let lines: Vec<String> = transcript.lines().collect();
        assert_eq!(
            lines,
            vec![
                " 1 [?.] compare index 0 (value 1)",
                " 2 [.?] compare index 1 (value 3)",
                " 3 [xx] 2 not found",
            ]
        );
        assert_eq!(transcript.outcome, RunOutcome::Exhausted { steps: 3 });
    }

    #[test]
    fn json_carries_snapshots_and_outcome() {
        let transcript =
            record(Algorithm::Linear, scenario(), 8, Duration::ZERO).expect("integers compare");
        let value = serde_json::to_value(&transcript).expect("serializes");
        assert_eq!(value["algorithm"], "linear");
        assert_eq!(value["target"], 8);
        assert_eq!(value["snapshots"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["snapshots"][3]["phase"], "found");
        assert_eq!(value["outcome"]["outcome"], "found");
        assert_eq!(value["outcome"]["index"], 2);
    }
}
