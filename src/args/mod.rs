//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::HydrateArgs;
pub use defaults::DEFAULT_BASE_URL;
pub use types::{OutputFormat, PositiveUsize};
