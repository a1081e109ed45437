use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_THRESHOLD_PERCENT: f64 = 80.0;
pub const DEFAULT_INTERVAL_SECONDS: u64 = 5;

/// Threshold and interval, fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct MonitorConfig {
    #[serde(default = "default_threshold")]
    pub threshold_percent: f64,
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
        }
    }
}

impl MonitorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD_PERCENT
}

fn default_interval() -> u64 {
    DEFAULT_INTERVAL_SECONDS
}
