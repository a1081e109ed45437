use chrono::{DateTime, Local};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One CPU reading and the local time it was taken.
///
/// Platforms occasionally report values slightly outside 0..=100; they are
/// kept as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub percent: f64,
    pub taken_at: DateTime<Local>,
}

impl Sample {
    pub fn new(percent: f64) -> Self {
        Self::at(percent, Local::now())
    }

    pub fn at(percent: f64, taken_at: DateTime<Local>) -> Self {
        Self { percent, taken_at }
    }

    pub fn timestamp(&self) -> String {
        self.taken_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Strictly greater: a reading equal to the threshold does not alert.
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.percent > threshold
    }
}
