// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Remote status enumeration and the snapshot the relay broadcasts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status value driven by the remote controller.
///
/// Delivery is fire-and-forget and most-recent-wins; the engine reads only
/// this field and reacts to transitions, never to levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteStatus {
    /// Nothing active; the display idles.
    #[default]
    Idle,
    /// A slide deck is advancing normally.
    Playing,
    /// The controller paused the deck.
    Paused,
    /// The controller asked the active visualizer to run its sort.
    Sorting,
    /// The display returned to the home screen.
    Home,
}

impl fmt::Display for RemoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Sorting => "sorting",
            Self::Home => "home",
        };
        f.write_str(label)
    }
}

/// Error returned when a status string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown remote status {input:?}")]
pub struct StatusParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for RemoteStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(Self::Idle),
            "playing" => Ok(Self::Playing),
            "paused" => Ok(Self::Paused),
            "sorting" => Ok(Self::Sorting),
            "home" => Ok(Self::Home),
            other => Err(StatusParseError {
                input: other.to_owned(),
            }),
        }
    }
}

/// One broadcast of the relay's shared demo state.
///
/// Mirrors the relay's state object; the engine consumes `status` and leaves
/// the navigation fields to the slide layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Current remote status.
    pub status: RemoteStatus,
    /// Active demo identifier, when one is selected.
    #[serde(default)]
    pub current_demo: Option<String>,
    /// Slide index within the active demo.
    #[serde(default)]
    pub current_slide: u32,
    /// Animation speed multiplier.
    #[serde(default = "default_speed")]
    pub speed: f32,
}

fn default_speed() -> f32 {
    1.0
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            status: RemoteStatus::Idle,
            current_demo: None,
            current_slide: 0,
            speed: 1.0,
        }
    }
}
