//! Classification of settled requests into success and failure outcomes.
mod diagnostic;


use crate::generator::SyntheticRecord;
use crate::http::{DispatchUnit, Rejection, ResponseSnapshot, Settlement};
use crate::services::Service;

pub use diagnostic::Diagnostic;

/// Lowest status treated as an application failure.
const FAILURE_STATUS_FLOOR: u16 = 400;
const CONFLICT_STATUS: u16 = 409;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success {
        service: Service,
        endpoint: &'static str,
        input: Option<SyntheticRecord>,
        status: u16,
        diagnostic: Diagnostic,
    },
    ApplicationFailure {
        service: Service,
        endpoint: &'static str,
        input: Option<SyntheticRecord>,
        status: u16,
        url: String,
        diagnostic: Diagnostic,
    },
    NetworkFailure {
        service: Service,
        endpoint: &'static str,
        input: Option<SyntheticRecord>,
        error: String,
    },
    RejectedFailure {
        service: Service,
        endpoint: &'static str,
        reason: String,
    },
}

impl Outcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub const fn service(&self) -> Service {
        match self {
            Self::Success { service, .. }
            | Self::ApplicationFailure { service, .. }
            | Self::NetworkFailure { service, .. }
            | Self::RejectedFailure { service, .. } => *service,
        }
    }

    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Success { endpoint, .. }
            | Self::ApplicationFailure { endpoint, .. }
            | Self::NetworkFailure { endpoint, .. }
            | Self::RejectedFailure { endpoint, .. } => *endpoint,
        }
    }

    /// Diagnostic shown to the operator: the parsed body, or the rejection
    /// reason when no response arrived.
    #[must_use]
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            Self::Success { diagnostic, .. } | Self::ApplicationFailure { diagnostic, .. } => {
                diagnostic.clone()
            }
            Self::NetworkFailure { error, .. } => Diagnostic::Text(error.clone()),
            Self::RejectedFailure { reason, .. } => Diagnostic::Text(reason.clone()),
        }
    }
}

/// Maps one settlement to exactly one outcome.
///
/// Pure: the same unit and settlement always produce the same outcome.
#[must_use]
pub fn classify(unit: &DispatchUnit, settlement: &Settlement) -> Outcome {
    let service = unit.service;
    let endpoint = unit.endpoint.name;

    match settlement {
        Settlement::Rejected(rejection @ (Rejection::Network(_) | Rejection::Cancelled)) => {
            Outcome::NetworkFailure {
                service,
                endpoint,
                input: unit.input.clone(),
                error: rejection.to_string(),
            }
        }
        Settlement::Rejected(Rejection::Local(reason)) => Outcome::RejectedFailure {
            service,
            endpoint,
            reason: reason.clone(),
        },
        Settlement::Fulfilled(response) => classify_response(unit, response),
    }
}

fn classify_response(unit: &DispatchUnit, response: &ResponseSnapshot) -> Outcome {
    let diagnostic = Diagnostic::from_body(response.body.as_deref().map_err(String::as_str));
    let status = response.status;

    if status < FAILURE_STATUS_FLOOR
        || (status == CONFLICT_STATUS && unit.endpoint.conflict_is_success)
    {
        return Outcome::Success {
            service: unit.service,
            endpoint: unit.endpoint.name,
            input: unit.input.clone(),
            status,
            diagnostic,
        };
    }

    Outcome::ApplicationFailure {
        service: unit.service,
        endpoint: unit.endpoint.name,
        input: unit.input.clone(),
        status,
        url: response.url.clone(),
        diagnostic,
    }
}
