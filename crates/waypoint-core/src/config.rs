//! Tunable settings: animation cadence, feedback delay, and starting preferences.
//!
//! Every field is optional in the JSON file; missing ones take the defaults
//! below. Command-line flags are applied on top by the CLI.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::preferences::Theme;
use crate::session::SessionTimings;

/// Default interval between decoy frames.
pub const DEFAULT_TICK_MS: u64 = 80;
/// Default length of the scrambling animation.
pub const DEFAULT_DURATION_MS: u64 = 1200;
/// Default lifetime of the "copied" feedback.
pub const DEFAULT_FEEDBACK_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaypointConfig {
    pub tick_ms: u64,
    pub duration_ms: u64,
    pub feedback_ms: u64,
    pub include_oceans: bool,
    pub theme: Theme,
}

impl Default for WaypointConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            duration_ms: DEFAULT_DURATION_MS,
            feedback_ms: DEFAULT_FEEDBACK_MS,
            include_oceans: true,
            theme: Theme::default(),
        }
    }
}

impl WaypointConfig {
    pub fn timings(&self) -> SessionTimings {
        SessionTimings {
            tick: Duration::from_millis(self.tick_ms),
            duration: Duration::from_millis(self.duration_ms),
        }
    }

    pub fn feedback(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }

    /// Read a JSON config file.
    pub fn load_from_path(path: &Path) -> std::io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str::<Self>(&raw).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("failed to parse config JSON: {e}"),
            )
        })
    }
}
