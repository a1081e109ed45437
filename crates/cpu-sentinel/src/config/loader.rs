use std::path::Path;

use super::schema::MonitorConfig;

/// Why a config could not be turned into a usable [`MonitorConfig`].
#[derive(Debug)]
pub enum LoadError {
    Read(std::io::Error),
    Syntax(serde_yaml::Error),
    Invalid { field: &'static str, reason: String },
}

impl LoadError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(e) => write!(f, "cannot read config: {e}"),
            Self::Syntax(e) => write!(f, "malformed config: {e}"),
            Self::Invalid { field, reason } => write!(f, "{field} {reason}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

/// Parses without validating; callers overlay flags first, then [`validate`].
pub fn read_from_file(path: &Path) -> Result<MonitorConfig, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(LoadError::Read)?;
    parse_str(&contents)
}

pub fn parse_str(yaml: &str) -> Result<MonitorConfig, LoadError> {
    serde_yaml::from_str(yaml).map_err(LoadError::Syntax)
}

/// Checked once at startup, after file and command-line values are merged.
pub fn validate(cfg: &MonitorConfig) -> Result<(), LoadError> {
    let threshold = cfg.threshold_percent;
    if !threshold.is_finite() {
        return Err(LoadError::invalid("threshold_percent", "must be a finite number"));
    }
    if !(0.0..=100.0).contains(&threshold) {
        return Err(LoadError::invalid(
            "threshold_percent",
            format!("must be within 0..=100, got {threshold}"),
        ));
    }
    if cfg.interval_seconds == 0 {
        return Err(LoadError::invalid("interval_seconds", "must be > 0"));
    }
    Ok(())
}
