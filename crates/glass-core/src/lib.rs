// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! glass-core: deterministic sort-step compiler and timed playback driver.
//!
//! A [`StepCompiler`] expands one run of a sort algorithm into an immutable
//! list of [`Step`] records. A [`PlaybackDriver`] replays that list against a
//! visible value sequence under host-driven timers, exposing a read-only
//! [`Frame`] after every applied step. The driver never touches a clock
//! itself: it emits [`TimerRequest`]s and the host calls back with the
//! matching [`TimerToken`] when the delay elapses.
//!
//! # Invariants
//!
//! - STEP-001: Replaying every mutating step in compiled order against the
//!   initial sequence yields the reference-sorted sequence, and the terminal
//!   [`Step::Complete`] carries exactly that sequence.
//! - PLAY-001: The playback cursor only moves forward while Running; the sole
//!   way back to zero is an explicit reset.
//! - PLAY-002: A step's mutation commits atomically at the step boundary,
//!   exactly once per cursor value; stale timer tokens are dropped silently.

mod announce;
mod compile;
mod deck;
mod driver;
mod frame;
mod replay;
mod step;
mod timer;
mod timing;

/// Announcement text shared by the driver and the presentation layer.
pub use announce::{announcement_for, complete_announcement, idle_prompt};
/// Step compilers for the three supported algorithms.
pub use compile::{BubbleSort, MergeSort, SelectionSort, SortKind, SortKindParseError, StepCompiler};
/// Compiled deck pairing an initial sequence with its step list.
pub use deck::{random_two_digit, Deck, STANDARD_VALUES};
/// Timer-driven playback state machine.
pub use driver::{PlaybackDriver, RunState};
/// Read-only render-surface snapshot.
pub use frame::{Frame, Phase, Tone};
/// Replay verification over compiled step lists.
pub use replay::{replay, ReplayError};
/// Step records and the value type they operate on.
pub use step::{Step, Value};
/// Host-facing timer scheduling types.
pub use timer::{TimerKind, TimerRequest, TimerToken};
/// Per-step-type duration table.
pub use timing::StepTiming;
