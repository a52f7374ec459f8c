// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Announcement wording, shared by the driver and anything rendering frames.

use crate::frame::Tone;
use crate::step::Step;

/// Prompt shown before a run starts, e.g. "Tap start to watch bubble sort
/// unfold".
#[must_use]
pub fn idle_prompt(algorithm: &str) -> String {
    format!("Tap start to watch {algorithm} unfold")
}

/// Terminal announcement, e.g. "Sorted! Bubble sort finished".
#[must_use]
pub fn complete_announcement(algorithm: &str) -> String {
    let mut chars = algorithm.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("Sorted! {capitalized} finished")
}

/// Narration and tone for one step, as shown when the step is entered.
#[must_use]
pub fn announcement_for(step: &Step, algorithm: &str) -> (String, Tone) {
    match step {
        Step::Compare { left, right, .. } => (format!("Comparing {left} and {right}"), Tone::Alert),
        Step::Swap { left, right, .. } => (format!("Swapping {left} and {right}"), Tone::Alert),
        Step::Write { index, value, .. } => (
            format!("Placing {value} into position {}", index + 1),
            Tone::Calm,
        ),
        Step::Mark { value, .. } => (format!("{value} locked in place"), Tone::Calm),
        Step::MinFound { value, .. } => (format!("{value} is the new minimum"), Tone::Alert),
        Step::Complete { .. } => (complete_announcement(algorithm), Tone::Calm),
    }
}
