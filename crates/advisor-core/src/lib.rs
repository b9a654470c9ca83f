//! Core abstractions for the financial advisor agent shell
//!
//! An [`AdvisorAgent`] carries a system prompt, the pass-through platform
//! credential and a [`CapabilityRegistry`]. Inbound calls name a capability
//! and pass structured JSON arguments; every capability answers with a string.

pub mod agent;
pub mod capability;
pub mod error;
pub mod registry;

pub use agent::{AdvisorAgent, AdvisorAgentBuilder};
pub use capability::{Capability, parse_args};
pub use error::{Error, Result};
pub use registry::CapabilityRegistry;
