mod app;
mod config;
mod generator;
mod http;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use generator::GeneratorError;
pub use http::HttpError;
pub use validation::ValidationError;
