//! The agent shell: system prompt, platform credential and capability dispatch

use crate::{Capability, CapabilityRegistry, Error, Result};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Conversational agent exposing a set of capabilities
///
/// The platform API key is carried as-is for whatever transport hosts the
/// agent; nothing here inspects it.
///
/// # Example
///
/// ```
/// use advisor_core::AdvisorAgent;
///
/// let agent = AdvisorAgent::builder()
///     .system_prompt("You are a financial assistant.")
///     .build();
///
/// assert!(agent.capabilities().is_empty());
/// ```
pub struct AdvisorAgent {
    system_prompt: String,
    api_key: Option<String>,
    registry: CapabilityRegistry,
}

impl AdvisorAgent {
    /// Create a new agent builder
    pub fn builder() -> AdvisorAgentBuilder {
        AdvisorAgentBuilder::default()
    }

    /// System prompt describing the agent to its platform
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Platform API key, if one was configured
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Registered capabilities
    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// Register additional capabilities
    pub fn add_capabilities(&mut self, capabilities: impl IntoIterator<Item = Arc<dyn Capability>>) {
        for capability in capabilities {
            self.registry.register(capability);
        }
    }

    /// Invoke a capability by name with JSON arguments
    #[instrument(skip(self, args))]
    pub async fn invoke(&self, name: &str, args: Value) -> Result<String> {
        let capability = self
            .registry
            .get(name)
            .ok_or_else(|| Error::CapabilityNotFound(name.to_string()))?;

        debug!("Running capability");
        capability.run(args).await
    }
}

impl fmt::Debug for AdvisorAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .registry
            .list()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        f.debug_struct("AdvisorAgent")
            .field("system_prompt", &self.system_prompt)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("capabilities", &names)
            .finish()
    }
}

/// Builder for [`AdvisorAgent`]
#[derive(Default)]
pub struct AdvisorAgentBuilder {
    system_prompt: Option<String>,
    api_key: Option<String>,
    registry: CapabilityRegistry,
}

impl AdvisorAgentBuilder {
    /// Set the system prompt
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Set the platform API key
    pub fn api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Add a capability
    pub fn capability(mut self, capability: Arc<dyn Capability>) -> Self {
        self.registry.register(capability);
        self
    }

    /// Build the agent
    pub fn build(self) -> AdvisorAgent {
        AdvisorAgent {
            system_prompt: self.system_prompt.unwrap_or_default(),
            api_key: self.api_key,
            registry: self.registry,
        }
    }
}
