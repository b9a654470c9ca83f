//! Capabilities the advisor agent registers with its shell

pub mod analyze;
pub mod greeting;

pub use analyze::AnalyzeFinancialData;
pub use greeting::{Farewell, Greet};

use crate::config::AdvisorConfig;
use crate::engine::FinancialAnalyst;
use crate::error::Result;
use crate::prompts::AGENT_SYSTEM_PROMPT;
use advisor_core::{AdvisorAgent, Capability};
use std::sync::Arc;

/// The full capability set around one analyst
pub fn financial_capabilities(analyst: FinancialAnalyst) -> Vec<Arc<dyn Capability>> {
    vec![
        Arc::new(Greet),
        Arc::new(Farewell),
        Arc::new(AnalyzeFinancialData::new(analyst)),
    ]
}

/// Assemble the financial assistant agent from configuration
pub fn build_agent(config: &AdvisorConfig) -> Result<AdvisorAgent> {
    let analyst = FinancialAnalyst::from_config(config)?;

    let mut agent = AdvisorAgent::builder()
        .system_prompt(AGENT_SYSTEM_PROMPT)
        .api_key(config.platform_api_key.clone())
        .build();
    agent.add_capabilities(financial_capabilities(analyst));

    Ok(agent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_build_agent_registers_capabilities() {
        let config = AdvisorConfig::builder().platform_api_key("platform").build();
        let agent = build_agent(&config).unwrap();

        assert_eq!(agent.system_prompt(), AGENT_SYSTEM_PROMPT);
        assert_eq!(agent.api_key(), Some("platform"));

        let capabilities = agent.capabilities().list();
        let names: Vec<&str> = capabilities.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["analyzeFinancialData", "farewell", "greet"]);

        let reply = agent.invoke("greet", json!({ "name": "Ada" })).await.unwrap();
        assert_eq!(reply, "Hello, Ada!");
    }
}
