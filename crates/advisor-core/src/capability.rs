//! Capability trait definition

use crate::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A named operation the agent exposes to its hosting platform
///
/// Each capability publishes a name, a description and a JSON schema for its
/// arguments. Calls arrive as JSON and always answer with a single string.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Run the capability with arguments matching `input_schema`
    async fn run(&self, args: Value) -> Result<String>;

    /// Unique name within a [`CapabilityRegistry`](crate::CapabilityRegistry)
    fn name(&self) -> &str;

    /// Description shown to the platform's planner
    fn description(&self) -> &str;

    /// JSON Schema of the arguments
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    ///
    /// let schema = json!({
    ///     "type": "object",
    ///     "properties": {
    ///         "name": { "type": "string", "description": "The name of the user to greet" }
    ///     },
    ///     "required": ["name"]
    /// });
    /// assert_eq!(schema["required"][0], "name");
    /// ```
    fn input_schema(&self) -> Value;
}

/// Deserialize capability arguments, naming the capability on failure
pub fn parse_args<T: DeserializeOwned>(capability: &str, args: Value) -> Result<T> {
    serde_json::from_value(args).map_err(|e| Error::InvalidArguments {
        capability: capability.to_string(),
        reason: e.to_string(),
    })
}
