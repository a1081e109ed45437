use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{read_from_file, validate, MonitorConfig};

#[derive(Parser, Debug, Default)]
#[command(
    name = "cpu-sentinel",
    version,
    about = "Watch host CPU usage and alert when it crosses a threshold"
)]
pub struct Opts {
    #[arg(
        short,
        long,
        env = "CPU_SENTINEL_THRESHOLD",
        allow_negative_numbers = true,
        help = "Alert when CPU usage is strictly above this percentage [default: 80]"
    )]
    pub threshold: Option<f64>,

    #[arg(
        short,
        long,
        env = "CPU_SENTINEL_INTERVAL",
        help = "Seconds to wait after each sample [default: 5]"
    )]
    pub interval: Option<u64>,

    #[arg(short, long, env = "CPU_SENTINEL_CONFIG", help = "YAML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Emit diagnostic logs as JSON on stderr")]
    pub log_json: bool,
}

impl Opts {
    /// Defaults, then the config file, then flags / environment. The merged
    /// result is validated once.
    pub fn resolve(&self) -> Result<MonitorConfig> {
        let mut cfg = match &self.config {
            Some(path) => read_from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => MonitorConfig::default(),
        };

        if let Some(threshold) = self.threshold {
            cfg.threshold_percent = threshold;
        }
        if let Some(interval) = self.interval {
            cfg.interval_seconds = interval;
        }

        validate(&cfg).context("invalid configuration")?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Flags only; clap's env fallbacks are bypassed so the caller's
    // CPU_SENTINEL_* variables cannot leak into these tests.
    fn flags(threshold: Option<f64>, interval: Option<u64>, config: Option<PathBuf>) -> Opts {
        Opts {
            threshold,
            interval,
            config,
            ..Default::default()
        }
    }

    #[test]
    fn no_flags_gives_defaults() {
        let cfg = Opts::default().resolve().unwrap();
        assert_eq!(cfg, MonitorConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = flags(Some(92.5), Some(2), None).resolve().unwrap();
        assert_eq!(cfg.threshold_percent, 92.5);
        assert_eq!(cfg.interval_seconds, 2);
    }

    #[test]
    fn zero_interval_rejected_at_startup() {
        let err = flags(None, Some(0), None).resolve().unwrap_err();
        assert!(format!("{err:#}").contains("interval_seconds must be > 0"));
    }

    #[test]
    fn negative_threshold_rejected_at_startup() {
        let err = flags(Some(-5.0), None, None).resolve().unwrap_err();
        assert!(format!("{err:#}").contains("threshold_percent"));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentinel.yml");
        std::fs::write(&path, "threshold_percent: 60\ninterval_seconds: 0\n").unwrap();

        let cfg = flags(None, Some(7), Some(path)).resolve().unwrap();
        assert_eq!(cfg.threshold_percent, 60.0);
        assert_eq!(cfg.interval_seconds, 7);
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let path = PathBuf::from("/nonexistent/sentinel.yml");
        let err = flags(None, None, Some(path)).resolve().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sentinel.yml"));
    }

    #[test]
    fn short_and_long_flags_parse() {
        let opts = Opts::try_parse_from([
            "cpu-sentinel",
            "-t",
            "-5",
            "--interval",
            "3",
            "-c",
            "sentinel.yml",
            "--no-color",
            "--log-json",
        ])
        .unwrap();
        assert_eq!(opts.threshold, Some(-5.0));
        assert_eq!(opts.interval, Some(3));
        assert_eq!(opts.config, Some(PathBuf::from("sentinel.yml")));
        assert!(opts.no_color);
        assert!(opts.log_json);
    }

    #[test]
    fn non_numeric_interval_is_a_parse_error() {
        let res = Opts::try_parse_from(["cpu-sentinel", "--interval", "soon"]);
        assert!(res.is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Opts::command().debug_assert();
    }
}
