use tracing::warn;

use crate::shutdown::{ShutdownSender, request_shutdown, wait_for_shutdown};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Forwards Ctrl+C (and SIGTERM on unix) to the shared cancellation signal.
///
/// The task ends when the signal fires or when a shutdown is sent by anyone
/// else; callers abort it once the run is over.
pub fn setup_signal_shutdown_handler(shutdown_tx: &ShutdownSender) -> tokio::task::JoinHandle<()> {
    let shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        let mut shutdown_rx = shutdown_tx.subscribe();

        #[cfg(unix)]
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                warn!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        #[cfg(unix)]
        {
            tokio::select! {
                () = wait_for_shutdown(&mut shutdown_rx) => {}
                _ = tokio::signal::ctrl_c() => {
                    warn!("Interrupted; cancelling in-flight requests");
                    request_shutdown(&shutdown_tx);
                }
                () = async {
                    if let Some(signal) = term_signal.as_mut() {
                        signal.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {
                    warn!("Terminated; cancelling in-flight requests");
                    request_shutdown(&shutdown_tx);
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                () = wait_for_shutdown(&mut shutdown_rx) => {}
                _ = tokio::signal::ctrl_c() => {
                    warn!("Interrupted; cancelling in-flight requests");
                    request_shutdown(&shutdown_tx);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shutdown::shutdown_channel;
    use std::future::Future;
    use std::time::Duration;

    const SIGNAL_HANDLER_SETTLE: Duration = Duration::from_millis(10);
    const SHUTDOWN_HANDLER_TIMEOUT: Duration = Duration::from_secs(1);

    fn run_async_test<F>(future: F) -> Result<(), String>
    where
        F: Future<Output = Result<(), String>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| format!("Failed to build runtime: {}", err))?;
        runtime.block_on(future)
    }

    #[test]
    fn signal_handler_exits_on_shutdown() -> Result<(), String> {
        run_async_test(async {
            let (shutdown_tx, _) = shutdown_channel();
            let handle = setup_signal_shutdown_handler(&shutdown_tx);

            tokio::time::sleep(SIGNAL_HANDLER_SETTLE).await;
            request_shutdown(&shutdown_tx);

            tokio::time::timeout(SHUTDOWN_HANDLER_TIMEOUT, handle)
                .await
                .map_err(|err| format!("Timed out waiting for shutdown handler: {}", err))?
                .map_err(|err| format!("Shutdown task join error: {}", err))?;
            Ok(())
        })
    }
}
