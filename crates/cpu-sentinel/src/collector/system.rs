use std::time::Duration;

use sysinfo::{CpuRefreshKind, RefreshKind, System};

use super::traits::{CpuSampler, SampleError};

/// Utilization is measured across this window on every sample.
pub const SAMPLE_WINDOW: Duration = Duration::from_secs(1);

pub struct SystemSampler {
    sys: System,
    window: Duration,
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemSampler {
    pub fn new() -> Self {
        Self::with_window(SAMPLE_WINDOW)
    }

    pub(crate) fn with_window(window: Duration) -> Self {
        Self {
            sys: System::new_with_specifics(
                RefreshKind::new().with_cpu(CpuRefreshKind::new().with_cpu_usage()),
            ),
            window: window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl CpuSampler for SystemSampler {
    async fn sample(&mut self) -> Result<f64, SampleError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(SampleError::Unsupported);
        }

        // usage is the delta between two refreshes
        self.sys.refresh_cpu_usage();
        tokio::time::sleep(self.window).await;
        self.sys.refresh_cpu_usage();

        if self.sys.cpus().is_empty() {
            return Err(SampleError::NoCpus);
        }

        let usage = self.sys.global_cpu_info().cpu_usage();
        if !usage.is_finite() {
            return Err(SampleError::InvalidReading(usage));
        }

        tracing::debug!(cpu_percent = usage, cores = self.sys.cpus().len(), "cpu sampled");
        Ok(f64::from(usage))
    }
}
