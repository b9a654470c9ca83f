//! Concrete LLM provider implementations
//!
//! This module contains implementations of the LLMProvider trait for
//! the completion services the agent talks to.

pub mod azure_openai;

pub use azure_openai::{AzureOpenAIConfig, AzureOpenAIProvider};
