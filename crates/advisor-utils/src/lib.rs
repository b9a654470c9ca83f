//! Shared utilities for the financial advisor agent
//!
//! This crate provides common functionality used across the workspace:
//! tracing setup, `.env`/environment loading and, behind the `test-server`
//! feature, a loopback HTTP server for exercising HTTP clients in tests.

pub mod config;
pub mod logging;

#[cfg(feature = "test-server")]
pub mod testing;

pub use config::{env_lookup, load_env_file};
pub use logging::init_tracing;
