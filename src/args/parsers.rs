use std::time::Duration;

use super::types::PositiveUsize;
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_usize(s: &str) -> AppResult<PositiveUsize> {
    s.parse::<PositiveUsize>().map_err(AppError::from)
}

pub(super) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

/// Parses a request timeout: `<n>ms`, `<n>s`, or a bare number of seconds.
pub(crate) fn parse_timeout(value: &str) -> Result<Duration, ValidationError> {
    let value = value.trim();
    let (amount, from_amount): (&str, fn(u64) -> Duration) = match value.strip_suffix("ms") {
        Some(millis) => (millis, Duration::from_millis),
        None => (value.strip_suffix('s').unwrap_or(value), Duration::from_secs),
    };
    let amount: u64 = amount
        .parse()
        .map_err(|err| ValidationError::InvalidTimeout {
            value: value.to_owned(),
            source: err,
        })?;
    if amount == 0 {
        return Err(ValidationError::ZeroTimeout);
    }
    Ok(from_amount(amount))
}
