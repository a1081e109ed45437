use std::future::Future;

/// Source of whole-host CPU utilization readings.
///
/// One call yields one percentage measured over the sampler's own window.
/// The returned future may be dropped mid-measurement when the monitor is
/// asked to stop.
pub trait CpuSampler {
    fn sample(&mut self) -> impl Future<Output = Result<f64, SampleError>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    Unsupported,
    NoCpus,
    InvalidReading(f32),
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported => write!(f, "CPU metrics are not supported on this platform"),
            Self::NoCpus => write!(f, "no CPUs reported by the system"),
            Self::InvalidReading(v) => write!(f, "invalid CPU reading: {v}"),
        }
    }
}

impl std::error::Error for SampleError {}
