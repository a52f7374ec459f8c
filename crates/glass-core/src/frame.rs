// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only render-surface snapshots.
//!
//! The driver re-derives a [`Frame`] after every applied step; the
//! presentation layer draws it and sends nothing back except user-initiated
//! start/pause/reset calls.

use crate::step::Value;

/// Visual phase of the slot(s) currently highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Phase {
    /// Nothing is animating.
    Idle,
    /// Two slots raised for comparison.
    Compare,
    /// A swapping pair lifted and gliding.
    Lift,
    /// A swapping pair dropping back into place.
    Drop,
    /// A slot receiving a merge write.
    Write,
    /// A slot being finalized.
    Mark,
    /// The running minimum moved.
    MinFound,
    /// The run finished.
    Complete,
}

/// Urgency of the current announcement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tone {
    /// Resting narration.
    Calm,
    /// Something just happened; draw the eye.
    Alert,
}

/// Snapshot of everything the presentation layer needs to draw one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// The visible value sequence.
    pub values: Vec<Value>,
    /// Slot indices currently highlighted.
    pub highlighted: Vec<usize>,
    /// Slots flagged as permanently sorted.
    pub sorted: Vec<usize>,
    /// Slot holding the running minimum, when one is tracked.
    pub min_index: Option<usize>,
    /// Visual phase for the highlighted slots.
    pub phase: Phase,
    /// Human-readable narration for the current step.
    pub announcement: String,
    /// Urgency of the announcement.
    pub tone: Tone,
    /// True once the run reached its terminal state.
    pub is_complete: bool,
}
