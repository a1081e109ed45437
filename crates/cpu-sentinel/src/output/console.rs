use std::io::{self, Stdout, Write};

use super::format::{alert_block, banner_lines, failure_line, shutdown_line, status_line};
use super::Reporter;
use crate::config::MonitorConfig;
use crate::monitor::Sample;

/// Writes the human-readable report, flushing after each event so lines
/// show up immediately on an interactive terminal.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<I>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn banner(&mut self, config: &MonitorConfig) -> io::Result<()> {
        self.emit(banner_lines(config))
    }

    fn status(&mut self, sample: &Sample) -> io::Result<()> {
        self.emit([status_line(sample)])
    }

    fn alert(&mut self, sample: &Sample, threshold: f64) -> io::Result<()> {
        self.emit(alert_block(sample, threshold))
    }

    fn stopped(&mut self) -> io::Result<()> {
        self.emit([shutdown_line()])
    }

    fn failed(&mut self, error: &dyn std::error::Error) -> io::Result<()> {
        self.emit([failure_line(error)])
    }
}
