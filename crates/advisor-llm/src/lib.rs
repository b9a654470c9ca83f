//! LLM provider abstraction layer for the financial advisor agent
//!
//! This crate provides provider-agnostic abstractions for chat completions:
//!
//! - Message types for LLM communication
//! - Completion request/response types
//! - Provider trait for LLM implementations
//! - The Azure OpenAI provider (behind the `azure` feature, on by default)

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LLMError, Result};
pub use messages::{Message, Role};
pub use provider::LLMProvider;

// Provider implementations (feature-gated)
#[cfg(feature = "azure")]
pub mod providers;
