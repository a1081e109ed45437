use crate::collector::SampleError;

#[derive(Debug)]
pub enum MonitorError {
    Sampling(SampleError),
    Output(std::io::Error),
    Signal(std::io::Error),
}

impl std::fmt::Display for MonitorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sampling(e) => write!(f, "sampling failed: {e}"),
            Self::Output(e) => write!(f, "console output failed: {e}"),
            Self::Signal(e) => write!(f, "signal handler setup failed: {e}"),
        }
    }
}

impl std::error::Error for MonitorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sampling(e) => Some(e),
            Self::Output(e) | Self::Signal(e) => Some(e),
        }
    }
}

impl From<SampleError> for MonitorError {
    fn from(e: SampleError) -> Self {
        Self::Sampling(e)
    }
}

impl From<std::io::Error> for MonitorError {
    fn from(e: std::io::Error) -> Self {
        Self::Output(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_cause() {
        let err = MonitorError::from(SampleError::NoCpus);
        assert_eq!(
            err.to_string(),
            "sampling failed: no CPUs reported by the system"
        );
    }

    #[test]
    fn io_errors_map_to_output() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        assert!(matches!(MonitorError::from(io), MonitorError::Output(_)));
    }
}
