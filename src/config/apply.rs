use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{HydrateArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::services::ConflictPolicy;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments and returns the per-endpoint
/// conflict policy. Values given on the command line take precedence.
///
/// # Errors
///
/// Returns an error when config values are invalid or name unknown endpoints.
pub fn apply_config(
    args: &mut HydrateArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<ConflictPolicy> {
    if !is_cli(matches, "base_url")
        && let Some(base_url) = config.base_url.clone()
    {
        args.base_url = base_url;
    }

    if !is_cli(matches, "total")
        && let Some(total) = config.total
    {
        args.total = PositiveUsize::try_from(total).map_err(|err| invalid("total", err))?;
    }

    if !is_cli(matches, "seed")
        && let Some(seed) = config.seed
    {
        args.seed = Some(seed);
    }

    if !is_cli(matches, "ceiling")
        && let Some(ceiling) = config.ceiling
    {
        args.ceiling = ceiling;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout
    {
        args.request_timeout = Some(timeout);
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    let mut policy = ConflictPolicy::default();
    if let Some(endpoints) = config.endpoints.as_ref() {
        for (name, endpoint) in endpoints {
            if let Some(conflict_is_success) = endpoint.conflict_is_success {
                policy
                    .set(name, conflict_is_success)
                    .map_err(|err| invalid("endpoints", err))?;
            }
        }
    }

    Ok(policy)
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn invalid(field: &'static str, source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidValue { field, source })
}
