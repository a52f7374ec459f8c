// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Edge-triggered bridge from remote status to playback driver operations.
//!
//! The adapter tracks the previously observed status so that only status
//! *transitions* fire driver calls. The relay re-broadcasts its full state
//! on every controller input, so the same status value arrives many times;
//! level-triggering would restart the sort on every navigation tap.

use glass_core::{PlaybackDriver, RunState};
use tracing::debug;

use crate::status::RemoteStatus;

/// What one observation did to the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncAction {
    /// The driver's `start` was invoked.
    Started,
    /// The driver's `reset` was invoked.
    Reset,
    /// Nothing changed.
    NoOp,
}

/// Watches status edges and mirrors them onto a [`PlaybackDriver`].
#[derive(Debug, Default)]
pub struct RemoteSyncAdapter {
    previous: Option<RemoteStatus>,
}

impl RemoteSyncAdapter {
    /// Creates an adapter that has observed nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last status this adapter observed, if any.
    #[must_use]
    pub fn previous(&self) -> Option<RemoteStatus> {
        self.previous
    }

    /// Feeds one observed status; duplicates of the previous value are
    /// no-ops.
    ///
    /// Transitions *into* `Sorting` start the driver unless it is already
    /// running. Transitions into `Playing` or `Home` reset it when a run is
    /// in progress or finished (the controller navigated away or asked for a
    /// restart).
    pub fn observe(&mut self, status: RemoteStatus, driver: &mut PlaybackDriver) -> SyncAction {
        let changed = self.previous != Some(status);
        self.previous = Some(status);
        if !changed {
            return SyncAction::NoOp;
        }

        let action = match status {
            RemoteStatus::Sorting => {
                if driver.run_state() == RunState::Running {
                    SyncAction::NoOp
                } else {
                    driver.start();
                    SyncAction::Started
                }
            }
            RemoteStatus::Playing | RemoteStatus::Home => {
                if matches!(
                    driver.run_state(),
                    RunState::Running | RunState::Completed
                ) {
                    driver.reset();
                    SyncAction::Reset
                } else {
                    SyncAction::NoOp
                }
            }
            RemoteStatus::Idle | RemoteStatus::Paused => SyncAction::NoOp,
        };
        debug!(%status, ?action, "remote status edge");
        action
    }
}
