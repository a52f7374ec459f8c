// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-step-type duration table for the playback driver.

use std::time::Duration;

use crate::step::Step;

/// Wall-clock pacing for each step type.
///
/// Every step is shown for `base × multiplier(step)`; mutating steps get a
/// settle sub-phase at `settle_portion` of that span where the lift flips to
/// a drop before the mutation commits at the boundary. Defaults match the
/// demo cadence: 1.4 s base, settle at 45%, shorter marker beats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepTiming {
    /// Base step duration.
    pub base: Duration,
    /// Fraction of a step's duration after which the settle phase begins.
    /// Clamped to `(0.0, 1.0)` when scheduling.
    pub settle_portion: f32,
    /// Multiplier for `Compare` steps.
    pub compare: f32,
    /// Multiplier for `Swap` steps.
    pub swap: f32,
    /// Multiplier for `Write` steps.
    pub write: f32,
    /// Multiplier for `Mark` steps.
    pub mark: f32,
    /// Multiplier for `MinFound` steps.
    pub min_found: f32,
}

impl Default for StepTiming {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(1400),
            settle_portion: 0.45,
            compare: 1.0,
            swap: 1.0,
            write: 1.0,
            mark: 0.6,
            min_found: 0.6,
        }
    }
}

impl StepTiming {
    /// Builds the default table over a caller-chosen base duration.
    #[must_use]
    pub fn with_base(base: Duration) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Returns a copy with every step duration scaled by `factor`.
    ///
    /// This is how a remote speed slider maps onto the table; in-flight steps
    /// keep their already-scheduled duration.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            base: self.base.mul_f32(factor.max(0.01)),
            ..self
        }
    }

    /// Full display duration for `step`.
    #[must_use]
    pub fn duration_of(&self, step: &Step) -> Duration {
        let multiplier = match step {
            Step::Compare { .. } => self.compare,
            Step::Swap { .. } => self.swap,
            Step::Write { .. } => self.write,
            Step::Mark { .. } => self.mark,
            Step::MinFound { .. } => self.min_found,
            Step::Complete { .. } => 0.0,
        };
        self.base.mul_f32(multiplier.max(0.0))
    }

    /// Delay before `step`'s settle sub-phase.
    #[must_use]
    pub fn settle_delay(&self, step: &Step) -> Duration {
        self.duration_of(step)
            .mul_f32(self.settle_portion.clamp(0.01, 0.99))
    }
}
