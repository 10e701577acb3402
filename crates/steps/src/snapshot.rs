use std::sync::Arc;

use serde::Serialize;

/// Visual state of a single index within a [`Snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellState {
    /// Neutral: not part of the current comparison.
    Idle,
    /// The element currently compared against the target.
    Candidate,
    /// Still inside the binary search bounds.
    InRange,
    /// Ruled out by a previous binary search comparison.
    Eliminated,
    /// The matched element of a successful run.
    Found,
    /// Every element once a run is exhausted without a match.
    NotFound,
}

impl CellState {
    /// Single character used by plain-text transcripts.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Idle => '.',
            Self::Candidate => '?',
            Self::InRange => '-',
            Self::Eliminated => ' ',
            Self::Found => '*',
            Self::NotFound => 'x',
        }
    }
}

/// Inclusive binary search bounds at the time of a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub left: usize,
    pub right: usize,
}

impl Bounds {
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.left <= index && index <= self.right
    }
}

/// Where a run stands when a snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "kebab-case")]
pub enum Phase {
    /// `index` is about to be compared. `bounds` is set for binary search.
    Probe {
        index: usize,
        bounds: Option<Bounds>,
    },
    /// Terminal: the element at `index` equals the target.
    Found { index: usize },
    /// Terminal: no element equals the target.
    Exhausted,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Probe { .. })
    }
}

/// Immutable picture of one search step.
///
/// The sequence is shared between every snapshot of a run; the state list is
/// built fresh from the [`Phase`] and always matches the sequence length.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<T> {
    step: usize,
    #[serde(flatten)]
    phase: Phase,
    values: Arc<[T]>,
    states: Vec<CellState>,
}

impl<T> Snapshot<T> {
    /// Build the snapshot for `phase`, deriving every per-index state from it.
    #[must_use]
    pub fn new(values: Arc<[T]>, step: usize, phase: Phase) -> Self {
        let states = (0..values.len())
            .map(|index| state_at(phase, index))
            .collect();
        Self {
            step,
            phase,
            values,
            states,
        }
    }

    /// One-based position of this snapshot within its run.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Shared handle to the sequence, for consumers that outlive the snapshot.
    #[must_use]
    pub fn shared_values(&self) -> Arc<[T]> {
        Arc::clone(&self.values)
    }

    #[must_use]
    pub fn states(&self) -> &[CellState] {
        &self.states
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Index under comparison, if this is a probe.
    #[must_use]
    pub const fn candidate(&self) -> Option<usize> {
        match self.phase {
            Phase::Probe { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Render the state list as one glyph per index.
    #[must_use]
    pub fn glyphs(&self) -> String {
        self.states.iter().map(|state| state.glyph()).collect()
    }
}

fn state_at(phase: Phase, index: usize) -> CellState {
    match phase {
        Phase::Probe { index: probe, .. } if probe == index => CellState::Candidate,
        Phase::Probe { bounds: None, .. } => CellState::Idle,
        Phase::Probe {
            bounds: Some(bounds),
            ..
        } => {
            if bounds.contains(index) {
                CellState::InRange
            } else {
                CellState::Eliminated
            }
        }
        Phase::Found { index: found } if found == index => CellState::Found,
        Phase::Found { .. } => CellState::Idle,
        Phase::Exhausted => CellState::NotFound,
    }
}
