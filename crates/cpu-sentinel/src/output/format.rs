use colored::Colorize;

use crate::config::MonitorConfig;
use crate::monitor::Sample;

pub const SEPARATOR: &str = "-------------------------------------------------";

pub fn banner_lines(config: &MonitorConfig) -> Vec<String> {
    vec![
        format!("{} {}", "📈", "Starting CPU Sentinel...".bright_cyan().bold()),
        format!(
            "Alert threshold set to {}% CPU usage.",
            format!("{:.1}", config.threshold_percent).bright_white().bold()
        ),
        format!(
            "Checking every {} seconds.",
            config.interval_seconds.to_string().bright_white().bold()
        ),
        "Press Ctrl+C to stop.".dimmed().to_string(),
    ]
}

pub fn status_line(sample: &Sample) -> String {
    format!(
        "{} Current CPU Usage: {}%",
        format!("[{}]", sample.timestamp()).dimmed(),
        format!("{:.1}", sample.percent).bright_white()
    )
}

pub fn alert_block(sample: &Sample, threshold: f64) -> Vec<String> {
    vec![
        format!("🚨 {} 🚨", "ALERT!".red().bold()),
        format!(
            "[{}] High CPU usage detected: {}%",
            sample.timestamp(),
            format!("{:.1}", sample.percent).red().bold()
        ),
        format!("This is above the threshold of {threshold:.1}%."),
        SEPARATOR.dimmed().to_string(),
    ]
}

pub fn shutdown_line() -> String {
    format!("\n👋 {}", "Monitor stopped by user. Exiting.".green())
}

pub fn failure_line(error: &dyn std::error::Error) -> String {
    format!(
        "\n🚫 {} {}",
        "An unexpected error occurred:".red().bold(),
        error
    )
}
