use clap::Parser;
use std::time::Duration;

use crate::services::{CallSelection, Service};

use super::parsers::{parse_bool_env, parse_positive_usize, parse_timeout};
use super::types::{OutputFormat, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Generate seeded synthetic users and fire batches of requests at local REST services, tallying successes and failures per endpoint."
)]
pub struct HydrateArgs {
    /// Issue GET /v1/users calls
    #[arg(long = "users-service", help_heading = "Services")]
    pub users_service: bool,

    /// Register generated users via POST /v1/users/register
    #[arg(long = "users-service-registration", help_heading = "Services")]
    pub users_service_registration: bool,

    /// Issue GET /v1/authentication calls
    #[arg(long = "authentication-service", help_heading = "Services")]
    pub authentication_service: bool,

    /// Register generated credentials via POST /v1/authentication/register
    #[arg(long = "authentication-service-registration", help_heading = "Services")]
    pub authentication_service_registration: bool,

    /// Base URL the endpoint paths are joined onto
    #[arg(long = "base-url", default_value = super::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Requests per selected call set (and records generated for registration)
    #[arg(
        long = "total",
        short = 'n',
        default_value = "100",
        value_parser = parse_positive_usize
    )]
    pub total: PositiveUsize,

    /// Generator seed (defaults to the batch size)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum records a single generation may produce
    #[arg(long, default_value_t = crate::generator::DEFAULT_CEILING)]
    pub ceiling: usize,

    /// Per-request timeout, e.g. 500ms or 5s; transport default when unset
    #[arg(long = "timeout", value_parser = parse_timeout)]
    pub request_timeout: Option<Duration>,

    /// Path to a TOML or JSON config file (defaults to hydrate.toml/hydrate.json)
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Summary format
    #[arg(long = "output-format", default_value = "text", ignore_case = true)]
    pub output_format: OutputFormat,

    /// Enable verbose logging (sets log level to debug unless overridden by HYDRATE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}

impl HydrateArgs {
    /// Call sets requested for `service`.
    #[must_use]
    pub const fn selection(&self, service: Service) -> CallSelection {
        match service {
            Service::Users => CallSelection {
                main: self.users_service,
                register: self.users_service_registration,
            },
            Service::Authentication => CallSelection {
                main: self.authentication_service,
                register: self.authentication_service_registration,
            },
        }
    }

    /// Selected services in catalog order.
    #[must_use]
    pub fn selected_services(&self) -> Vec<(Service, CallSelection)> {
        Service::ALL
            .into_iter()
            .map(|service| (service, self.selection(service)))
            .filter(|(_, selection)| selection.any())
            .collect()
    }
}
