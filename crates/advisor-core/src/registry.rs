//! Registry of the capabilities an agent exposes

use crate::Capability;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry for capabilities
///
/// Filled once while the agent is assembled and read-only afterwards, so it
/// needs no locking when shared between concurrent calls.
#[derive(Default, Clone)]
pub struct CapabilityRegistry {
    capabilities: BTreeMap<String, Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability, replacing any previous one with the same name
    pub fn register(&mut self, capability: Arc<dyn Capability>) {
        let name = capability.name().to_string();
        if self.capabilities.insert(name.clone(), capability).is_some() {
            tracing::warn!("Capability '{}' registered twice; keeping the latest", name);
        }
    }

    /// Get a capability by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Capability>> {
        self.capabilities.get(name).cloned()
    }

    /// All capabilities, ordered by name
    pub fn list(&self) -> Vec<Arc<dyn Capability>> {
        self.capabilities.values().cloned().collect()
    }

    /// Get the number of registered capabilities
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}
