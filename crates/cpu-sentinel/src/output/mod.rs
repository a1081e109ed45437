mod console;
mod format;

pub use console::ConsoleReporter;
pub use format::{alert_block, banner_lines, failure_line, shutdown_line, status_line};

use std::io;

use crate::config::MonitorConfig;
use crate::monitor::Sample;

/// Sink for everything the monitor prints.
///
/// Every method may fail; a failed write ends the run as an unexpected
/// failure.
pub trait Reporter {
    fn banner(&mut self, config: &MonitorConfig) -> io::Result<()>;
    fn status(&mut self, sample: &Sample) -> io::Result<()>;
    fn alert(&mut self, sample: &Sample, threshold: f64) -> io::Result<()>;
    fn stopped(&mut self) -> io::Result<()>;
    fn failed(&mut self, error: &dyn std::error::Error) -> io::Result<()>;
}
