use crate::collector::SystemSampler;
use crate::config::MonitorConfig;
use crate::monitor::{Monitor, MonitorError, Outcome};
use crate::output::{ConsoleReporter, Reporter};
use crate::shutdown::ShutdownSignal;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Runs the monitor against the host until interrupted and returns the
/// process exit status.
pub async fn run(config: MonitorConfig) -> u8 {
    let mut reporter = ConsoleReporter::stdout();

    let shutdown = match ShutdownSignal::install() {
        Ok(signal) => signal,
        Err(e) => {
            tracing::error!(error = %e, "failed to install signal handlers");
            return finish(&mut reporter, Err(MonitorError::Signal(e)));
        }
    };

    let mut monitor = Monitor::new(config, SystemSampler::new(), reporter);
    let result = monitor.run(shutdown.recv()).await;
    finish(monitor.reporter_mut(), result)
}

/// Prints the closing message for `result` and maps it to an exit status.
pub fn finish<R: Reporter>(reporter: &mut R, result: Result<Outcome, MonitorError>) -> u8 {
    match result {
        Ok(Outcome::Stopped { iterations, alerts }) => {
            tracing::info!(iterations, alerts, "stopped by user");
            if let Err(e) = reporter.stopped() {
                tracing::error!(error = %e, "failed to print shutdown message");
            }
            EXIT_OK
        }
        Err(err) => {
            tracing::error!(error = %err, "monitor failed");
            if let Err(e) = reporter.failed(&err) {
                tracing::error!(error = %e, "failed to print failure message");
            }
            EXIT_FAILURE
        }
    }
}
