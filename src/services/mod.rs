//! Service catalog: the closed set of services the CLI can exercise and the
//! endpoints behind each call set.
mod endpoint;


use std::collections::BTreeMap;

use crate::error::{GeneratorError, ValidationError};
use crate::generator::{GeneratorConfig, SyntheticRecord, generate_credentials, generate_users};

pub use endpoint::{BodyEncoding, EndpointSpec, HttpMethod};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Service {
    Users,
    Authentication,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSet {
    /// Parameterless GET against the service root.
    Main,
    /// POST of one generated record per request.
    Register,
}

/// Call sets enabled for one service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallSelection {
    pub main: bool,
    pub register: bool,
}

impl CallSelection {
    #[must_use]
    pub const fn any(self) -> bool {
        self.main || self.register
    }

    pub fn call_sets(self) -> impl Iterator<Item = CallSet> {
        [(self.main, CallSet::Main), (self.register, CallSet::Register)]
            .into_iter()
            .filter_map(|(enabled, call_set)| enabled.then_some(call_set))
    }
}

impl Service {
    pub const ALL: [Self; 2] = [Self::Users, Self::Authentication];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Authentication => "authentication",
        }
    }

    #[must_use]
    pub const fn endpoint(self, call_set: CallSet) -> EndpointSpec {
        match (self, call_set) {
            (Self::Users, CallSet::Main) => EndpointSpec::get("users", "/v1/users"),
            (Self::Users, CallSet::Register) => {
                EndpointSpec::register("users-registration", "/v1/users/register")
            }
            (Self::Authentication, CallSet::Main) => {
                EndpointSpec::get("authentication", "/v1/authentication")
            }
            (Self::Authentication, CallSet::Register) => EndpointSpec::register(
                "authentication-registration",
                "/v1/authentication/register",
            ),
        }
    }

    /// Generates the registration payloads this service expects.
    ///
    /// # Errors
    ///
    /// Returns a [`GeneratorError`] when the generator config is unusable.
    pub fn registration_records(
        self,
        total: usize,
        config: &GeneratorConfig,
    ) -> Result<Vec<SyntheticRecord>, GeneratorError> {
        let records = match self {
            Self::Users => generate_users(total, config)?
                .into_iter()
                .map(SyntheticRecord::from)
                .collect(),
            Self::Authentication => generate_credentials(total, config)?
                .into_iter()
                .map(SyntheticRecord::from)
                .collect(),
        };
        Ok(records)
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every endpoint name known to the catalog.
pub fn endpoint_names() -> impl Iterator<Item = &'static str> {
    Service::ALL.into_iter().flat_map(|service| {
        [CallSet::Main, CallSet::Register]
            .into_iter()
            .map(move |call_set| service.endpoint(call_set).name)
    })
}

/// Per-endpoint overrides for treating HTTP 409 as success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictPolicy {
    overrides: BTreeMap<String, bool>,
}

impl ConflictPolicy {
    /// Records an override for a named endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownEndpoint`] for names outside the catalog.
    pub fn set(&mut self, endpoint: &str, conflict_is_success: bool) -> Result<(), ValidationError> {
        if !endpoint_names().any(|name| name == endpoint) {
            return Err(ValidationError::UnknownEndpoint {
                name: endpoint.to_owned(),
            });
        }
        self.overrides.insert(endpoint.to_owned(), conflict_is_success);
        Ok(())
    }

    #[must_use]
    pub fn apply(&self, endpoint: EndpointSpec) -> EndpointSpec {
        match self.overrides.get(endpoint.name) {
            Some(&conflict_is_success) => endpoint.with_conflict_is_success(conflict_is_success),
            None => endpoint,
        }
    }
}
