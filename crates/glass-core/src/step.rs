// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Step records: one immutable event per atomic algorithm action.
//!
//! Every step carries the operand values the compiler observed when it
//! recorded the event. Applying a mutating step re-checks those operands
//! against the live sequence first, so a step can never scramble state it was
//! not compiled against (PLAY-002's verification half).

use crate::replay::ReplayError;

/// Element type for all sequences handled by the engine.
///
/// The demos sort small integer datasets; a signed 64-bit value covers every
/// demo input without any float comparison ambiguity.
pub type Value = i64;

/// One atomic recorded algorithm event.
///
/// Step lists are produced by a [`StepCompiler`](crate::StepCompiler) and are
/// immutable afterwards. `Compare`, `Mark`, and `MinFound` never mutate the
/// sequence; `Swap` and `Write` do; `Complete` terminates the list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// Compared slots `i` and `j`; no mutation, used for highlighting.
    Compare {
        /// Left slot index.
        i: usize,
        /// Right slot index.
        j: usize,
        /// Value at `i` when compared.
        left: Value,
        /// Value at `j` when compared.
        right: Value,
    },
    /// Exchanged slots `i` and `j`.
    Swap {
        /// Left slot index.
        i: usize,
        /// Right slot index.
        j: usize,
        /// Value at `i` before the exchange.
        left: Value,
        /// Value at `j` before the exchange.
        right: Value,
    },
    /// Overwrote one slot from an auxiliary buffer (merge sort).
    Write {
        /// Slot being written.
        index: usize,
        /// Value placed into the slot.
        value: Value,
        /// Originating slot in the pre-merge layout, when known, so the
        /// presentation layer can animate provenance.
        source: Option<usize>,
    },
    /// Flagged one slot as permanently sorted.
    Mark {
        /// Slot that is now final.
        index: usize,
        /// Value occupying the slot.
        value: Value,
    },
    /// Selection sort found a new running minimum; no mutation.
    MinFound {
        /// Slot holding the new minimum.
        index: usize,
        /// The minimum value.
        value: Value,
    },
    /// Terminal marker; no further steps follow.
    Complete {
        /// The fully sorted sequence.
        sorted: Vec<Value>,
    },
}

impl Step {
    /// Returns true when applying this step changes the value sequence.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Swap { .. } | Self::Write { .. })
    }

    /// Slot indices this step touches, for highlight overlays.
    #[must_use]
    pub fn touched(&self) -> Vec<usize> {
        match self {
            Self::Compare { i, j, .. } | Self::Swap { i, j, .. } => vec![*i, *j],
            Self::Write { index, source, .. } => match source {
                Some(src) => vec![*index, *src],
                None => vec![*index],
            },
            Self::Mark { index, .. } | Self::MinFound { index, .. } => vec![*index],
            Self::Complete { .. } => Vec::new(),
        }
    }

    /// Applies this step's mutation to `values`, verifying recorded operands.
    ///
    /// Non-mutating steps succeed without touching the slice. `Swap` checks
    /// that both slots still hold the recorded operands before exchanging;
    /// `Write` only bound-checks, since the target slot legitimately holds a
    /// stale value mid-merge.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::IndexOutOfBounds`] for an index past the end of
    /// `values` and [`ReplayError::OperandMismatch`] when a swap's recorded
    /// operands no longer match the sequence.
    pub fn apply_to(&self, values: &mut [Value]) -> Result<(), ReplayError> {
        match *self {
            Self::Swap { i, j, left, right } => {
                let len = values.len();
                if i >= len || j >= len {
                    return Err(ReplayError::IndexOutOfBounds {
                        index: i.max(j),
                        len,
                    });
                }
                if values[i] != left || values[j] != right {
                    return Err(ReplayError::OperandMismatch { i, j });
                }
                values.swap(i, j);
                Ok(())
            }
            Self::Write { index, value, .. } => {
                if index >= values.len() {
                    return Err(ReplayError::IndexOutOfBounds {
                        index,
                        len: values.len(),
                    });
                }
                values[index] = value;
                Ok(())
            }
            Self::Compare { .. }
            | Self::Mark { .. }
            | Self::MinFound { .. }
            | Self::Complete { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn swap_verifies_operands_before_exchanging() {
        let step = Step::Swap {
            i: 0,
            j: 1,
            left: 5,
            right: 4,
        };
        let mut values = vec![5, 4, 3];
        step.apply_to(&mut values).unwrap();
        assert_eq!(values, vec![4, 5, 3]);

        // Stale operands: the sequence moved on, the swap must refuse.
        let mut drifted = vec![9, 4, 3];
        assert!(matches!(
            step.apply_to(&mut drifted),
            Err(ReplayError::OperandMismatch { i: 0, j: 1 })
        ));
        assert_eq!(drifted, vec![9, 4, 3]);
    }

    #[test]
    fn non_mutating_steps_leave_sequence_untouched() {
        let mut values = vec![2, 1];
        for step in [
            Step::Compare {
                i: 0,
                j: 1,
                left: 2,
                right: 1,
            },
            Step::Mark { index: 0, value: 2 },
            Step::MinFound { index: 1, value: 1 },
            Step::Complete { sorted: vec![1, 2] },
        ] {
            assert!(!step.is_mutation());
            step.apply_to(&mut values).unwrap();
        }
        assert_eq!(values, vec![2, 1]);
    }

    #[test]
    fn write_past_end_is_out_of_bounds() {
        let step = Step::Write {
            index: 3,
            value: 7,
            source: None,
        };
        let mut values = vec![1, 2];
        assert!(matches!(
            step.apply_to(&mut values),
            Err(ReplayError::IndexOutOfBounds { index: 3, len: 2 })
        ));
    }
}
