// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Decks: an initial sequence paired with its compiled step list.
//!
//! A deck is the unit the playback driver consumes. It owns the ground-truth
//! initial sequence (for resets) and the immutable step list compiled from
//! it, plus the algorithm name for announcements.

use crate::compile::StepCompiler;
use crate::step::{Step, Value};

/// Default dataset used by the fixed-input demos.
pub const STANDARD_VALUES: [Value; 5] = [5, 4, 3, 2, 1];

/// A compiled playback unit: initial values plus their step list.
#[derive(Clone, Debug)]
pub struct Deck {
    initial: Vec<Value>,
    steps: Vec<Step>,
    algorithm: &'static str,
}

impl Deck {
    /// Compiles `initial` with the given compiler into a playable deck.
    #[must_use]
    pub fn compile(compiler: &dyn StepCompiler, initial: &[Value]) -> Self {
        Self {
            initial: initial.to_vec(),
            steps: compiler.compile(initial),
            algorithm: compiler.name(),
        }
    }

    /// Compiles the standard five-element demo dataset.
    #[must_use]
    pub fn standard(compiler: &dyn StepCompiler) -> Self {
        Self::compile(compiler, &STANDARD_VALUES)
    }

    /// The initial (unsorted) sequence.
    #[must_use]
    pub fn initial(&self) -> &[Value] {
        &self.initial
    }

    /// The compiled step list, terminal `Complete` included.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Lowercase algorithm name, e.g. `"merge sort"`.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Number of `Compare` steps in the deck.
    #[must_use]
    pub fn compare_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Compare { .. }))
            .count()
    }

    /// Number of `Swap` steps in the deck.
    #[must_use]
    pub fn swap_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Swap { .. }))
            .count()
    }

    /// Number of `Write` steps in the deck.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Write { .. }))
            .count()
    }
}

/// Samples `n` two-digit values (10..=99) from a seeded linear congruential
/// generator.
///
/// An ambient RNG would make deck compilation unreproducible; the
/// caller-supplied seed keeps it deterministic end to end.
#[must_use]
pub fn random_two_digit(n: usize, seed: u64) -> Vec<Value> {
    // Numerical Recipes LCG constants; plenty for demo datasets.
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let v = (state >> 33) % 90;
            Value::try_from(10 + v).unwrap_or(10)
        })
        .collect()
}
