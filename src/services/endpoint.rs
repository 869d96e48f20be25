use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    None,
    Json,
}

/// Static description of one REST endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    /// Stable identifier used for tallies and configuration keys.
    pub name: &'static str,
    pub path: &'static str,
    pub method: HttpMethod,
    pub body: BodyEncoding,
    /// Treat HTTP 409 as success ("already exists").
    pub conflict_is_success: bool,
}

impl EndpointSpec {
    #[must_use]
    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            method: HttpMethod::Get,
            body: BodyEncoding::None,
            conflict_is_success: false,
        }
    }

    #[must_use]
    pub const fn register(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            method: HttpMethod::Post,
            body: BodyEncoding::Json,
            conflict_is_success: true,
        }
    }

    #[must_use]
    pub const fn with_conflict_is_success(mut self, conflict_is_success: bool) -> Self {
        self.conflict_is_success = conflict_is_success;
        self
    }
}
