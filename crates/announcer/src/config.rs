//! Announcer configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Shortest pause between cycles, whatever the configured rate
const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(1);

/// Announcer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnouncerConfig {
    /// Display refresh rate the loop is paced to (Hz)
    pub refresh_hz: f64,

    /// Consecutive failed frames before the loop pauses itself
    pub max_consecutive_failures: u32,
}

impl Default for AnnouncerConfig {
    fn default() -> Self {
        Self {
            refresh_hz: 60.0,
            max_consecutive_failures: 30,
        }
    }
}

impl AnnouncerConfig {
    /// Time between cycles, never shorter than 1 ms
    pub fn refresh_interval(&self) -> Duration {
        let hz = if self.refresh_hz.is_nan() { 1.0 } else { self.refresh_hz.max(1.0) };
        Duration::from_secs_f64(1.0 / hz).max(MIN_REFRESH_INTERVAL)
    }
}
