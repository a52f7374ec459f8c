// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Replay verification: prove a step list is faithful to its algorithm.
//!
//! Replaying applies every mutating step in compiled order against a copy of
//! the initial sequence and checks the terminal contract (STEP-001): exactly
//! one [`Step::Complete`], last in the list, carrying the now non-descending
//! sequence. Compilers are pure and deterministic, so replay doubles as the
//! engine's self-check in tests and as the ground-truth projector for hosts
//! that want the final state without animating.

use thiserror::Error;

use crate::step::{Step, Value};

/// Errors surfaced while replaying a compiled step list.
///
/// These indicate a corrupt or hand-forged step list; compiler output never
/// produces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// A step referenced a slot past the end of the sequence.
    #[error("step index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds {
        /// Offending slot index.
        index: usize,
        /// Sequence length.
        len: usize,
    },

    /// A swap's recorded operands no longer match the live sequence.
    #[error("swap operands at ({i}, {j}) do not match the sequence")]
    OperandMismatch {
        /// Left slot index.
        i: usize,
        /// Right slot index.
        j: usize,
    },

    /// The list ended without a terminal `Complete` step.
    #[error("step list is missing its terminal Complete step")]
    MissingComplete,

    /// A step appeared after the terminal `Complete` step.
    #[error("step found after the terminal Complete step")]
    StepAfterComplete,

    /// The `Complete` step's payload differs from the replayed sequence.
    #[error("Complete payload does not match the replayed sequence")]
    CompleteMismatch,

    /// The replayed sequence is not non-descending.
    #[error("replayed sequence is not sorted")]
    NotSorted,
}

/// Replays `steps` against a copy of `initial` and returns the final sequence.
///
/// # Errors
///
/// Returns a [`ReplayError`] when the step list violates the terminal
/// contract or any step fails operand verification.
pub fn replay(initial: &[Value], steps: &[Step]) -> Result<Vec<Value>, ReplayError> {
    let mut values = initial.to_vec();
    let mut completed: Option<Vec<Value>> = None;

    for step in steps {
        if completed.is_some() {
            return Err(ReplayError::StepAfterComplete);
        }
        step.apply_to(&mut values)?;
        if let Step::Complete { sorted } = step {
            completed = Some(sorted.clone());
        }
    }

    let Some(sorted) = completed else {
        return Err(ReplayError::MissingComplete);
    };
    if sorted != values {
        return Err(ReplayError::CompleteMismatch);
    }
    if values.windows(2).any(|w| w[0] > w[1]) {
        return Err(ReplayError::NotSorted);
    }
    Ok(values)
}
