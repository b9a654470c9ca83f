//! Error types for advisor-core

use thiserror::Error;

/// Result type alias for advisor-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for capability dispatch
#[derive(Error, Debug)]
pub enum Error {
    /// No capability registered under this name
    #[error("Unknown capability: {0}")]
    CapabilityNotFound(String),

    /// Arguments did not match the capability's schema
    #[error("Invalid arguments for {capability}: {reason}")]
    InvalidArguments {
        /// Capability name
        capability: String,
        /// What was wrong
        reason: String,
    },

    /// The capability ran and failed
    #[error("Capability failed: {0}")]
    CapabilityFailed(String),
}
