use proptest::prelude::*;
use searchviz_steps::{Algorithm, CellState, Phase, Snapshot};

fn collect(algorithm: Algorithm, values: &[i64], target: i64) -> Vec<Snapshot<i64>> {
    algorithm
        .steps(values.to_vec(), target)
        .collect::<Result<Vec<_>, _>>()
        .expect("integers always compare")
}

fn sorted(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    values
}

fn assert_well_formed(steps: &[Snapshot<i64>], len: usize) -> Result<(), TestCaseError> {
    let (last, probes) = steps.split_last().expect("at least one snapshot");
    prop_assert!(last.is_terminal());
    for snapshot in steps {
        prop_assert_eq!(snapshot.states().len(), len);
    }
    for probe in probes {
        prop_assert!(!probe.is_terminal());
        let candidates = probe
            .states()
            .iter()
            .filter(|state| **state == CellState::Candidate)
            .count();
        prop_assert_eq!(candidates, 1);
    }
    match last.phase() {
        Phase::Found { index } => {
            for (position, state) in last.states().iter().enumerate() {
                let expected = if position == index {
                    CellState::Found
                } else {
                    CellState::Idle
                };
                prop_assert_eq!(*state, expected);
            }
        }
        Phase::Exhausted => {
            prop_assert!(last.states().iter().all(|state| *state == CellState::NotFound));
        }
        other => prop_assert!(false, "non-terminal final phase {:?}", other),
    }
    Ok(())
}

proptest! {
    /// Property: linear search reports the lowest index holding the target.
    #[test]
    fn prop_linear_finds_first_match(
        values in prop::collection::vec(-20i64..20, 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = values[pick.index(values.len())];
        let steps = collect(Algorithm::Linear, &values, target);
        let first = values.iter().position(|value| *value == target).expect("present");
        prop_assert_eq!(steps.last().map(Snapshot::phase), Some(Phase::Found { index: first }));
        assert_well_formed(&steps, values.len())?;
    }

    /// Property: binary search over sorted input lands on a matching index.
    #[test]
    fn prop_binary_finds_a_match(
        values in prop::collection::vec(-50i64..50, 1..40).prop_map(sorted),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = values[pick.index(values.len())];
        let steps = collect(Algorithm::Binary, &values, target);
        match steps.last().map(Snapshot::phase) {
            Some(Phase::Found { index }) => prop_assert_eq!(values[index], target),
            other => prop_assert!(false, "expected a match, got {:?}", other),
        }
        assert_well_formed(&steps, values.len())?;
    }

    /// Property: an absent target exhausts both algorithms.
    #[test]
    fn prop_absent_target_exhausts(
        values in prop::collection::vec(0i64..100, 0..40).prop_map(sorted),
        target in 100i64..200,
    ) {
        for algorithm in Algorithm::ALL {
            let steps = collect(algorithm, &values, target);
            let last = steps.last().expect("terminal snapshot");
            prop_assert_eq!(last.phase(), Phase::Exhausted);
            prop_assert!(last.states().iter().all(|state| *state == CellState::NotFound));
            assert_well_formed(&steps, values.len())?;
        }
    }

    /// Property: probe counts stay within the documented bounds.
    #[test]
    fn prop_probe_counts_are_bounded(
        values in prop::collection::vec(-100i64..100, 0..64).prop_map(sorted),
        target in -120i64..120,
    ) {
        for algorithm in Algorithm::ALL {
            let steps = collect(algorithm, &values, target);
            let probes = steps.len() - 1;
            prop_assert!(
                probes <= algorithm.max_probes(values.len()),
                "{} made {} probes over {} values",
                algorithm,
                probes,
                values.len()
            );
            assert_well_formed(&steps, values.len())?;
        }
    }
}

#[test]
fn empty_sequence_yields_a_single_empty_terminal() {
    for algorithm in Algorithm::ALL {
        let steps = collect(algorithm, &[], 7);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].phase(), Phase::Exhausted);
        assert!(steps[0].states().is_empty());
    }
}

#[test]
fn binary_walkthrough_matches_the_textbook_trace() {
    let values = [2, 5, 8, 12, 19, 25];
    let steps = collect(Algorithm::Binary, &values, 12);
    let trace: Vec<String> = steps
        .iter()
        .map(|snapshot| match snapshot.phase() {
            Phase::Probe { index, .. } => format!("mid={index}"),
            Phase::Found { index } => format!("found={index}"),
            Phase::Exhausted => "exhausted".to_string(),
        })
        .collect();
    assert_eq!(trace, ["mid=2", "mid=4", "mid=3", "found=3"]);
}
