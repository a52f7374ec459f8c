// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Host-facing timer scheduling types.
//!
//! The driver never sleeps. It pushes [`TimerRequest`]s into an outbox; the
//! host drains them, waits out each delay on its own clock (thread sleep,
//! async timer, test harness — the driver does not care), and hands the
//! token back via [`PlaybackDriver::handle_timer`].
//!
//! Tokens carry the epoch and cursor they were minted for. Any transition
//! away from Running bumps the driver's epoch, so every outstanding token is
//! cancelled wholesale without the host having to track handles; a late
//! delivery is dropped silently (PLAY-002).
//!
//! [`PlaybackDriver::handle_timer`]: crate::PlaybackDriver::handle_timer

use std::time::Duration;

/// Which boundary within the current step a token fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerKind {
    /// Mid-step settle boundary: the visual lift flips to a drop.
    Settle,
    /// Step boundary: commit the mutation and advance the cursor.
    Advance,
}

/// Opaque guard pairing a scheduled callback with the driver state that
/// minted it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerToken {
    pub(crate) epoch: u64,
    pub(crate) cursor: usize,
    pub(crate) kind: TimerKind,
}

impl TimerToken {
    /// Which boundary this token fires.
    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

/// One pending callback the host must deliver after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    /// Delay from the moment the request was drained.
    pub delay: Duration,
    /// Token to hand back when the delay elapses.
    pub token: TimerToken,
}
