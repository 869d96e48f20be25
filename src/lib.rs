//! Core library for the `hydrate` CLI.
//!
//! The pipeline is: generate seeded synthetic records, issue one request per
//! record and endpoint, dispatch the whole batch concurrently, classify every
//! settled request, and tally successes and failures per endpoint.
pub mod app;
pub mod args;
pub mod classify;
pub mod config;
pub mod entry;
pub mod error;
pub mod generator;
pub mod http;
pub mod logger;
pub mod services;
pub mod shutdown;
pub mod shutdown_handlers;
pub mod tally;
