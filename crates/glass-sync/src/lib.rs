// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! glass-sync: bridges a remote controller's status feed onto the playback
//! driver.
//!
//! The remote relay broadcasts fire-and-forget status snapshots; this crate
//! owns the in-process side of that stream. [`SharedStatusFeed`] is the
//! explicit connection-manager object (replacing the transport-singleton
//! pattern): transports publish into it, interested parties subscribe.
//! [`RemoteSyncAdapter`] watches status *edges* and maps them onto
//! `start`/`reset` calls so re-delivered snapshots never re-fire.

mod adapter;
mod feed;
mod status;

/// Edge-triggered status → driver bridge.
pub use adapter::{RemoteSyncAdapter, SyncAction};
/// Status feed port and its in-process implementation.
pub use feed::{SharedStatusFeed, StatusFeed, StatusListener, SubscriptionId};
/// Remote status enumeration and snapshot wire type.
pub use status::{RemoteStatus, StatusParseError, StatusSnapshot};
