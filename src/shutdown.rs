//! Shared cancellation signal for in-flight requests.
//!
//! The signal is latched: once requested it stays set, so batches dispatched
//! after the request observe it immediately.
use tokio::sync::watch;

pub type ShutdownSender = watch::Sender<bool>;
pub type ShutdownReceiver = watch::Receiver<bool>;

#[must_use]
pub fn shutdown_channel() -> (ShutdownSender, ShutdownReceiver) {
    watch::channel(false)
}

/// Sets the signal. Works with or without live receivers.
pub fn request_shutdown(shutdown_tx: &ShutdownSender) {
    shutdown_tx.send_replace(true);
}

#[must_use]
pub fn shutdown_requested(shutdown_tx: &ShutdownSender) -> bool {
    *shutdown_tx.borrow()
}

/// Resolves once shutdown has been requested, including before the call.
/// Never resolves when every sender is gone without requesting it.
pub async fn wait_for_shutdown(shutdown_rx: &mut ShutdownReceiver) {
    let closed = shutdown_rx.wait_for(|requested| *requested).await.is_err();
    if closed {
        std::future::pending::<()>().await;
    }
}
