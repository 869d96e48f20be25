use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Base URL '{url}' cannot carry a path.")]
    BaseUrlCannotBeABase { url: String },
    #[error("Failed to join '{path}' onto '{base}': {source}")]
    JoinUrlFailed {
        base: String,
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build request for {url}: {source}")]
    BuildRequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to encode request body for {url}: {source}")]
    EncodeBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Request was cancelled before it settled.")]
    Cancelled,
}
