use std::io;

/// Interrupt (Ctrl+C) and, on unix, SIGTERM.
///
/// Every handler is registered in [`ShutdownSignal::install`], before the
/// monitor prints anything, so an early Ctrl+C still ends in a clean stop
/// rather than the default process kill.
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
    #[cfg(windows)]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl ShutdownSignal {
    pub fn install() -> io::Result<Self> {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            Ok(Self {
                interrupt: signal(SignalKind::interrupt())?,
                terminate: signal(SignalKind::terminate())?,
            })
        }

        #[cfg(windows)]
        {
            Ok(Self {
                ctrl_c: tokio::signal::windows::ctrl_c()?,
            })
        }
    }

    pub async fn recv(mut self) {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = self.interrupt.recv() => {
                    tracing::info!(signal = "SIGINT", "shutdown requested");
                }
                _ = self.terminate.recv() => {
                    tracing::info!(signal = "SIGTERM", "shutdown requested");
                }
            }
        }

        #[cfg(windows)]
        {
            self.ctrl_c.recv().await;
            tracing::info!(signal = "ctrl-c", "shutdown requested");
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::Command;
    use std::time::Duration;

    fn raise(signal: &str) {
        let status = Command::new("kill")
            .arg(format!("-{signal}"))
            .arg(std::process::id().to_string())
            .status()
            .expect("run kill");
        assert!(status.success());
    }

    #[tokio::test]
    async fn sigint_and_sigterm_each_resolve_recv() {
        for name in ["INT", "TERM"] {
            let signal = ShutdownSignal::install().unwrap();
            raise(name);
            tokio::time::timeout(Duration::from_secs(3), signal.recv())
                .await
                .unwrap_or_else(|_| panic!("SIG{name} did not resolve recv"));
        }
    }
}
