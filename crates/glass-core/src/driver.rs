// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Timer-driven playback state machine.
//!
//! The driver walks a compiled [`Deck`] one step at a time under host-driven
//! timers, applying each step's effect to the visible sequence at the step
//! boundary and exposing a [`Frame`] after every change.
//!
//! # State machine
//!
//! `Idle → Running ⇄ Paused`, `Running → Completed`; the only exit from
//! `Completed` is a reset (explicit, or implicit via [`start`]).
//!
//! # Invariants
//!
//! - PLAY-001: the cursor never decreases except on reset.
//! - PLAY-002: a step's mutation commits atomically at the step boundary,
//!   at most once per cursor value. Pausing or resetting bumps the token
//!   epoch, so every outstanding timer is cancelled before the transition is
//!   considered complete; a stale token that still arrives is dropped
//!   without effect.
//! - PLAY-003: pausing mid-step discards the step's phase progress; the step
//!   restarts from its beginning on resume. Nothing commits mid-phase.
//!
//! [`start`]: PlaybackDriver::start

use std::collections::BTreeSet;

use crate::announce::{announcement_for, complete_announcement, idle_prompt};
use crate::deck::Deck;
use crate::frame::{Frame, Phase, Tone};
use crate::step::{Step, Value};
use crate::timer::{TimerKind, TimerRequest, TimerToken};
use crate::timing::StepTiming;

/// Run state governing timer scheduling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RunState {
    /// Not started (or reset). The cursor sits at zero.
    #[default]
    Idle,
    /// Timer ticks advance the cursor.
    Running,
    /// Frozen mid-run without discarding progress.
    Paused,
    /// Terminal; only a reset leaves this state.
    Completed,
}

/// Replays a deck's step list against visible state on a host-driven
/// schedule.
#[derive(Debug)]
pub struct PlaybackDriver {
    deck: Deck,
    timing: StepTiming,
    visible: Vec<Value>,
    cursor: usize,
    state: RunState,
    epoch: u64,
    settled: bool,
    applied: Option<usize>,
    sorted: BTreeSet<usize>,
    min_index: Option<usize>,
    announcement: String,
    tone: Tone,
    outbox: Vec<TimerRequest>,
    disposed: bool,
}

impl PlaybackDriver {
    /// Creates an idle driver over a compiled deck.
    #[must_use]
    pub fn new(deck: Deck, timing: StepTiming) -> Self {
        let visible = deck.initial().to_vec();
        let announcement = idle_prompt(deck.algorithm());
        Self {
            deck,
            timing,
            visible,
            cursor: 0,
            state: RunState::Idle,
            epoch: 0,
            settled: false,
            applied: None,
            sorted: BTreeSet::new(),
            min_index: None,
            announcement,
            tone: Tone::Calm,
            outbox: Vec::new(),
            disposed: false,
        }
    }

    /// Begins or resumes playback.
    ///
    /// From `Completed` this performs an implicit reset first. While already
    /// `Running` it is a no-op. A deck with no steps ahead of its terminal
    /// `Complete` finishes immediately without a Running tick.
    pub fn start(&mut self) {
        if self.disposed {
            return;
        }
        match self.state {
            RunState::Running => {}
            RunState::Completed => {
                self.restore_initial();
                self.begin();
            }
            RunState::Idle | RunState::Paused => self.begin(),
        }
    }

    /// Freezes playback without discarding progress. No-op unless `Running`.
    pub fn pause(&mut self) {
        if self.disposed || self.state != RunState::Running {
            return;
        }
        self.cancel_pending();
        self.settled = false;
        self.state = RunState::Paused;
    }

    /// Cancels pending work and restores the initial sequence.
    ///
    /// Idempotent: any number of consecutive resets leaves the driver `Idle`
    /// over the original input.
    pub fn reset(&mut self) {
        if self.disposed {
            return;
        }
        self.restore_initial();
        self.state = RunState::Idle;
    }

    /// Permanently shuts the driver down; every later call and token is a
    /// no-op. A UI shell calls this on unmount.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.cancel_pending();
        self.disposed = true;
    }

    /// Delivers an elapsed timer. Stale tokens (older epoch, moved cursor)
    /// are dropped silently.
    pub fn handle_timer(&mut self, token: TimerToken) {
        if self.disposed || self.state != RunState::Running {
            return;
        }
        if token.epoch != self.epoch || token.cursor != self.cursor {
            return;
        }
        match token.kind {
            TimerKind::Settle => {
                self.settled = true;
                self.tone = Tone::Calm;
            }
            TimerKind::Advance => self.advance(),
        }
    }

    /// Drains the pending timer requests for the host to schedule.
    pub fn take_scheduled(&mut self) -> Vec<TimerRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Replaces the duration table. Takes effect at the next step boundary;
    /// an in-flight step keeps its already-scheduled duration.
    pub fn set_timing(&mut self, timing: StepTiming) {
        self.timing = timing;
    }

    /// Current run state.
    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// Playback cursor: how many steps have been shown so far.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The visible value sequence.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.visible
    }

    /// The deck being played.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Snapshot for the presentation layer.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let current = self.deck.steps().get(self.cursor);
        let (highlighted, phase) = match self.state {
            RunState::Idle => (Vec::new(), Phase::Idle),
            RunState::Completed => (Vec::new(), Phase::Complete),
            RunState::Running | RunState::Paused => match current {
                Some(step) => (step.touched(), self.phase_of(step)),
                None => (Vec::new(), Phase::Idle),
            },
        };
        Frame {
            values: self.visible.clone(),
            highlighted,
            sorted: self.sorted.iter().copied().collect(),
            min_index: self.min_index,
            phase,
            announcement: self.announcement.clone(),
            tone: self.tone,
            is_complete: self.state == RunState::Completed,
        }
    }

    fn phase_of(&self, step: &Step) -> Phase {
        match step {
            Step::Compare { .. } => Phase::Compare,
            Step::Swap { .. } => {
                if self.settled {
                    Phase::Drop
                } else {
                    Phase::Lift
                }
            }
            Step::Write { .. } => Phase::Write,
            Step::Mark { .. } => Phase::Mark,
            Step::MinFound { .. } => Phase::MinFound,
            Step::Complete { .. } => Phase::Complete,
        }
    }

    fn begin(&mut self) {
        if self.at_terminal() {
            self.finish();
            return;
        }
        self.state = RunState::Running;
        self.enter_current();
    }

    fn at_terminal(&self) -> bool {
        match self.deck.steps().get(self.cursor) {
            None | Some(Step::Complete { .. }) => true,
            Some(_) => false,
        }
    }

    /// Shows the step under the cursor: narration, min tracking, and the two
    /// timer boundaries.
    fn enter_current(&mut self) {
        let Some(step) = self.deck.steps().get(self.cursor) else {
            return;
        };
        let step = step.clone();
        let (announcement, tone) = announcement_for(&step, self.deck.algorithm());
        self.announcement = announcement;
        self.tone = tone;
        self.settled = false;
        if let Step::MinFound { index, .. } = step {
            self.min_index = Some(index);
        }
        self.outbox.push(TimerRequest {
            delay: self.timing.settle_delay(&step),
            token: TimerToken {
                epoch: self.epoch,
                cursor: self.cursor,
                kind: TimerKind::Settle,
            },
        });
        self.outbox.push(TimerRequest {
            delay: self.timing.duration_of(&step),
            token: TimerToken {
                epoch: self.epoch,
                cursor: self.cursor,
                kind: TimerKind::Advance,
            },
        });
    }

    /// Commits the current step at its boundary and moves to the next.
    fn advance(&mut self) {
        if self.applied != Some(self.cursor) {
            if let Some(step) = self.deck.steps().get(self.cursor) {
                let step = step.clone();
                // Operand mismatches skip the mutation by policy; the cursor
                // advances either way.
                let _ = step.apply_to(&mut self.visible);
                if let Step::Mark { index, .. } = step {
                    self.sorted.insert(index);
                    self.min_index = None;
                }
            }
            self.applied = Some(self.cursor);
        }
        self.cursor += 1;
        self.settled = false;
        if self.at_terminal() {
            self.finish();
        } else {
            self.enter_current();
        }
    }

    fn finish(&mut self) {
        self.cancel_pending();
        self.state = RunState::Completed;
        self.cursor = self.deck.steps().len();
        self.settled = false;
        self.min_index = None;
        self.sorted = (0..self.visible.len()).collect();
        if let Some(Step::Complete { sorted }) = self.deck.steps().last() {
            self.visible.clone_from(sorted);
        }
        self.announcement = complete_announcement(self.deck.algorithm());
        self.tone = Tone::Calm;
    }

    fn restore_initial(&mut self) {
        self.cancel_pending();
        self.visible = self.deck.initial().to_vec();
        self.cursor = 0;
        self.settled = false;
        self.applied = None;
        self.sorted.clear();
        self.min_index = None;
        self.announcement = idle_prompt(self.deck.algorithm());
        self.tone = Tone::Calm;
    }

    /// Invalidates every outstanding token and empties the outbox.
    fn cancel_pending(&mut self) {
        self.epoch += 1;
        self.outbox.clear();
    }
}
