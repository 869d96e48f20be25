use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Request, Url};

use crate::error::HttpError;
use crate::generator::SyntheticRecord;
use crate::services::{BodyEncoding, EndpointSpec, Service};

/// Everything needed to attribute a settled request back to its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchUnit {
    pub service: Service,
    pub endpoint: EndpointSpec,
    pub url: Url,
    pub input: Option<SyntheticRecord>,
}

/// A request that has been built but not sent.
#[derive(Debug)]
pub enum PendingCall {
    Ready(Request),
    /// The request could not be built locally; it settles as rejected.
    Failed(String),
}

#[derive(Debug)]
pub struct IssuedCall {
    pub unit: DispatchUnit,
    pub call: PendingCall,
}

/// Builds one outbound request for `input` against `endpoint`.
///
/// No network I/O happens here. Build failures are carried in the returned
/// call rather than raised, so one bad unit never aborts the batch.
#[must_use]
pub fn issue(
    client: &Client,
    base_url: &Url,
    service: Service,
    endpoint: EndpointSpec,
    input: Option<SyntheticRecord>,
) -> IssuedCall {
    let (url, call) = match base_url.join(endpoint.path) {
        Ok(url) => {
            let call = build_request(client, &url, endpoint, input.as_ref())
                .map_or_else(|err| PendingCall::Failed(err.to_string()), PendingCall::Ready);
            (url, call)
        }
        Err(err) => {
            let reason = HttpError::JoinUrlFailed {
                base: base_url.to_string(),
                path: endpoint.path.to_owned(),
                source: err,
            }
            .to_string();
            (base_url.clone(), PendingCall::Failed(reason))
        }
    };

    IssuedCall {
        unit: DispatchUnit {
            service,
            endpoint,
            url,
            input,
        },
        call,
    }
}

/// Issues one call per input, or `total` parameterless calls when the
/// endpoint takes no body.
#[must_use]
pub fn issue_batch(
    client: &Client,
    base_url: &Url,
    service: Service,
    endpoint: EndpointSpec,
    inputs: Option<Vec<SyntheticRecord>>,
    total: usize,
) -> Vec<IssuedCall> {
    match inputs {
        Some(records) => records
            .into_iter()
            .map(|record| issue(client, base_url, service, endpoint, Some(record)))
            .collect(),
        None => (0..total)
            .map(|_| issue(client, base_url, service, endpoint, None))
            .collect(),
    }
}

fn build_request(
    client: &Client,
    url: &Url,
    endpoint: EndpointSpec,
    input: Option<&SyntheticRecord>,
) -> Result<Request, HttpError> {
    let mut builder = client.request(endpoint.method.into(), url.clone());

    if let (BodyEncoding::Json, Some(record)) = (endpoint.body, input) {
        let body = serde_json::to_vec(record).map_err(|err| HttpError::EncodeBody {
            url: url.to_string(),
            source: err,
        })?;
        builder = builder
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body);
    }

    builder.build().map_err(|err| HttpError::BuildRequestFailed {
        url: url.to_string(),
        source: err,
    })
}
