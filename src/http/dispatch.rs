use futures_util::future::join_all;
use reqwest::{Client, Request};
use tracing::debug;

use crate::error::HttpError;
use crate::shutdown::{ShutdownReceiver, ShutdownSender, shutdown_requested, wait_for_shutdown};

use super::issuer::{DispatchUnit, IssuedCall, PendingCall};

/// Status, final URL and body of a response that arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSnapshot {
    pub status: u16,
    pub url: String,
    /// Raw body bytes, or the error raised while reading them.
    pub body: Result<Vec<u8>, String>,
}

/// Why a call never produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Transport error reported by the client.
    Network(String),
    /// The shared cancellation signal fired while the call was in flight.
    Cancelled,
    /// The call never started: local build failure or a failed task.
    Local(String),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(reason) | Self::Local(reason) => f.write_str(reason),
            Self::Cancelled => write!(f, "{}", HttpError::Cancelled),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Fulfilled(ResponseSnapshot),
    Rejected(Rejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub unit: DispatchUnit,
    pub settlement: Settlement,
}

/// Launches every call at once and waits for all of them to settle.
///
/// Settlements come back in input order. A failure in one call never cancels
/// the others; only the shared shutdown signal aborts in-flight calls, and
/// this function never sends it. When shutdown was already requested nothing
/// is spawned and every call settles as cancelled.
pub async fn dispatch_batch(
    client: &Client,
    calls: Vec<IssuedCall>,
    shutdown_tx: &ShutdownSender,
) -> Vec<Settled> {
    if shutdown_requested(shutdown_tx) {
        debug!("Shutdown requested; skipping {} request(s)", calls.len());
        return cancel_batch(calls);
    }

    let mut units = Vec::with_capacity(calls.len());
    let mut handles = Vec::with_capacity(calls.len());

    for IssuedCall { unit, call } in calls {
        let client = client.clone();
        let shutdown_rx = shutdown_tx.subscribe();
        handles.push(tokio::spawn(settle(client, call, shutdown_rx)));
        units.push(unit);
    }

    debug!("Dispatched {} request(s)", handles.len());
    let joined = join_all(handles).await;

    units
        .into_iter()
        .zip(joined)
        .map(|(unit, result)| {
            let settlement = result.unwrap_or_else(|err| {
                Settlement::Rejected(Rejection::Local(format!("Request task failed: {}", err)))
            });
            Settled { unit, settlement }
        })
        .collect()
}

/// Settles every call as cancelled without sending anything.
#[must_use]
pub fn cancel_batch(calls: Vec<IssuedCall>) -> Vec<Settled> {
    calls
        .into_iter()
        .map(|IssuedCall { unit, .. }| Settled {
            unit,
            settlement: Settlement::Rejected(Rejection::Cancelled),
        })
        .collect()
}

async fn settle(client: Client, call: PendingCall, mut shutdown_rx: ShutdownReceiver) -> Settlement {
    let request = match call {
        PendingCall::Ready(request) => request,
        PendingCall::Failed(reason) => return Settlement::Rejected(Rejection::Local(reason)),
    };

    tokio::select! {
        biased;
        () = wait_for_shutdown(&mut shutdown_rx) => Settlement::Rejected(Rejection::Cancelled),
        settlement = execute(&client, request) => settlement,
    }
}

async fn execute(client: &Client, request: Request) -> Settlement {
    match client.execute(request).await {
        Ok(response) => {
            let status = response.status().as_u16();
            let url = response.url().to_string();
            let body = response
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|err| err.to_string());
            Settlement::Fulfilled(ResponseSnapshot { status, url, body })
        }
        Err(err) => Settlement::Rejected(Rejection::Network(err.to_string())),
    }
}
