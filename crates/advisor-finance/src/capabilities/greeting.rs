//! Greeting and farewell capabilities

use advisor_core::{Capability, Result, parse_args};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
struct NameArgs {
    name: String,
}

fn name_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": {
                "type": "string",
                "description": description
            }
        },
        "required": ["name"]
    })
}

/// Greets a user by name
#[derive(Debug, Clone, Copy, Default)]
pub struct Greet;

#[async_trait]
impl Capability for Greet {
    async fn run(&self, args: Value) -> Result<String> {
        let args: NameArgs = parse_args(self.name(), args)?;
        Ok(format!("Hello, {}!", args.name))
    }

    fn name(&self) -> &'static str {
        "greet"
    }

    fn description(&self) -> &'static str {
        "Greet a user by name"
    }

    fn input_schema(&self) -> Value {
        name_schema("The name of the user to greet")
    }
}

/// Bids a user farewell
#[derive(Debug, Clone, Copy, Default)]
pub struct Farewell;

#[async_trait]
impl Capability for Farewell {
    async fn run(&self, args: Value) -> Result<String> {
        let args: NameArgs = parse_args(self.name(), args)?;
        Ok(format!("Goodbye, {}!", args.name))
    }

    fn name(&self) -> &'static str {
        "farewell"
    }

    fn description(&self) -> &'static str {
        "Say goodbye to a user"
    }

    fn input_schema(&self) -> Value {
        name_schema("The name of the user to bid farewell")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::Error;

    #[tokio::test]
    async fn test_greet() {
        assert_eq!(Greet.run(json!({ "name": "Ada" })).await.unwrap(), "Hello, Ada!");
    }

    #[tokio::test]
    async fn test_farewell() {
        assert_eq!(
            Farewell.run(json!({ "name": "Ada" })).await.unwrap(),
            "Goodbye, Ada!"
        );
    }

    #[test]
    fn test_missing_name_is_invalid() {
        let err = tokio_test::block_on(Greet.run(json!({}))).unwrap_err();
        assert!(matches!(err, Error::InvalidArguments { ref capability, .. } if capability == "greet"));
    }

    #[test]
    fn test_schema() {
        let schema = Farewell.input_schema();
        assert_eq!(schema["required"][0], "name");
        assert_eq!(Farewell.name(), "farewell");
    }
}
