use anyhow::Result;
use searchviz::{RunOutcome, SessionSummary, Transcript};

/// Print one line per snapshot followed by the outcome.
pub(crate) fn print_plain(transcript: &Transcript) {
    for line in transcript.lines() {
        println!("{line}");
    }
}

/// Format the transcript as a JSON string.
pub(crate) fn format_transcript_json(transcript: &Transcript) -> Result<String> {
    Ok(serde_json::to_string_pretty(transcript)?)
}

/// Print the JSON representation of the transcript.
pub(crate) fn print_json(transcript: &Transcript) -> Result<()> {
    println!("{}", format_transcript_json(transcript)?);
    Ok(())
}

/// Report what happened in an interactive session once the terminal is back.
pub(crate) fn print_summary(summary: &SessionSummary) {
    if summary.runs_started == 0 {
        return;
    }
    println!("{}", summary_line(summary));
}

fn summary_line(summary: &SessionSummary) -> String {
    let mut found = 0;
    let mut exhausted = 0;
    let mut cancelled = 0;
    for outcome in &summary.outcomes {
        match outcome {
            RunOutcome::Found { .. } => found += 1,
            RunOutcome::Exhausted { .. } => exhausted += 1,
            RunOutcome::Cancelled { .. } => cancelled += 1,
        }
    }
    format!(
        "{} runs: {found} found, {exhausted} not found, {cancelled} cancelled",
        summary.runs_started
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use searchviz::Algorithm;
    use searchviz::transcript::record;
    use serde_json::Value;

    use super::*;

    #[test]
    fn json_format_includes_every_snapshot() {
        let transcript = record(
            Algorithm::Binary,
            Arc::from(vec![2, 5, 8, 12, 19, 25]),
            12,
            Duration::ZERO,
        )
        .expect("integers compare");

        let json = format_transcript_json(&transcript).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["algorithm"], "binary");
        let snapshots = value["snapshots"].as_array().expect("array");
        assert_eq!(snapshots.len(), 4);
        assert_eq!(snapshots[0]["index"], 2);
        assert_eq!(snapshots[0]["bounds"]["left"], 0);
        assert_eq!(snapshots[0]["states"][2], "candidate");
        assert_eq!(value["outcome"]["steps"], 4);
    }

    #[test]
    fn summary_counts_each_outcome() {
        let summary = SessionSummary {
            runs_started: 3,
            outcomes: vec![
                RunOutcome::Found { index: 1, steps: 2 },
                RunOutcome::Cancelled { steps: 1 },
                RunOutcome::Exhausted { steps: 4 },
            ],
        };
        assert_eq!(
            summary_line(&summary),
            "3 runs: 1 found, 1 not found, 1 cancelled"
        );
    }
}
