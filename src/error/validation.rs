use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid timeout '{value}'. Expected <n>ms, <n>s or <n>: {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Timeout must be > 0.")]
    ZeroTimeout,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Unknown endpoint '{name}' in configuration.")]
    UnknownEndpoint { name: String },
    #[error("No service call set selected.")]
    NoServiceSelected,
}
