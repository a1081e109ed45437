use std::future::Future;

use super::error::MonitorError;
use super::sample::Sample;
use super::state::RunState;
use crate::collector::CpuSampler;
use crate::config::MonitorConfig;
use crate::output::Reporter;

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Stopped { iterations: u64, alerts: u64 },
}

/// Sample, report, sleep, repeat.
///
/// The sleep starts after the sample completes, so one iteration lasts the
/// sampler's window plus the configured interval. Both suspension points are
/// raced against the shutdown future; whichever the signal lands in is
/// abandoned and the run returns [`Outcome::Stopped`].
pub struct Monitor<S, R> {
    config: MonitorConfig,
    sampler: S,
    reporter: R,
    state: RunState,
}

impl<S, R> Monitor<S, R>
where
    S: CpuSampler,
    R: Reporter,
{
    pub fn new(config: MonitorConfig, sampler: S, reporter: R) -> Self {
        Self {
            config,
            sampler,
            reporter,
            state: RunState::Running,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    pub async fn run<F>(&mut self, shutdown: F) -> Result<Outcome, MonitorError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        self.reporter.banner(&self.config)?;
        tracing::info!(
            threshold_percent = self.config.threshold_percent,
            interval_s = self.config.interval_seconds,
            "monitor started"
        );

        let interval = self.config.interval();
        let mut iterations = 0u64;
        let mut alerts = 0u64;

        while self.state.is_running() {
            let reading = tokio::select! {
                biased;
                _ = &mut shutdown => None,
                r = self.sampler.sample() => Some(r),
            };
            let Some(reading) = reading else {
                self.state.stop();
                break;
            };

            let sample = Sample::new(reading?);
            iterations += 1;
            if self.observe(&sample)? {
                alerts += 1;
            }

            let interrupted = tokio::select! {
                biased;
                _ = &mut shutdown => true,
                _ = tokio::time::sleep(interval) => false,
            };
            if interrupted {
                self.state.stop();
            }
        }

        tracing::info!(iterations, alerts, "monitor stopped");
        Ok(Outcome::Stopped { iterations, alerts })
    }

    /// Prints the status line and, above threshold, the alert block.
    /// Returns whether an alert fired.
    fn observe(&mut self, sample: &Sample) -> Result<bool, MonitorError> {
        let threshold = self.config.threshold_percent;
        self.reporter.status(sample)?;

        if !sample.exceeds(threshold) {
            return Ok(false);
        }

        tracing::warn!(
            cpu_percent = sample.percent,
            threshold_percent = threshold,
            "cpu usage above threshold"
        );
        self.reporter.alert(sample, threshold)?;
        Ok(true)
    }
}
