use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use cpu_sentinel::cli::Opts;
use cpu_sentinel::{logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let opts = Opts::parse();
    logging::init(opts.log_json);

    if opts.no_color {
        colored::control::set_override(false);
    }

    let config = match opts.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "startup aborted");
            eprintln!("{} {:#}", "✗".red().bold(), e);
            return ExitCode::from(run::EXIT_FAILURE);
        }
    };

    tracing::info!(
        threshold_percent = config.threshold_percent,
        interval_s = config.interval_seconds,
        "cpu-sentinel configured"
    );

    ExitCode::from(run::run(config).await)
}
