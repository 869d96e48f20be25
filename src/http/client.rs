use std::time::Duration;

use reqwest::{Client, Url};
use tracing::error;

use crate::error::{AppError, AppResult, HttpError};

const DEFAULT_USER_AGENT: &str = concat!("hydrate/", env!("CARGO_PKG_VERSION"));
/// TCP keepalive probe interval for pooled connections.
const TCP_KEEPALIVE: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, Default)]
pub struct ClientOptions {
    /// Per-request timeout; `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

/// Builds the shared HTTP client used for every request in a run.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(options: &ClientOptions) -> AppResult<Client> {
    let mut client_builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .http1_only()
        .tcp_keepalive(TCP_KEEPALIVE);

    if let Some(timeout) = options.request_timeout {
        client_builder = client_builder.timeout(timeout);
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed { source: err })
    })
}

/// Parses and validates the base URL endpoints are joined onto.
///
/// # Errors
///
/// Returns an error when the URL does not parse or cannot be used as a base.
pub fn parse_base_url(value: &str) -> AppResult<Url> {
    let url = Url::parse(value).map_err(|err| {
        AppError::http(HttpError::InvalidBaseUrl {
            url: value.to_owned(),
            source: err,
        })
    })?;
    if url.cannot_be_a_base() {
        return Err(AppError::http(HttpError::BaseUrlCannotBeABase {
            url: value.to_owned(),
        }));
    }
    Ok(url)
}
