//! Command-line interface for the financial advisor agent
//!
//! # Usage
//!
//! ```bash
//! # Settings come from the environment or a .env file
//! export BASE_URL="https://api.marketstack.com/v1"
//! export ACCESS_KEY="..."
//! export AZURE_OPENAI_ENDPOINT="https://my-resource.openai.azure.com"
//! export AZURE_DEPLOYMENT_NAME="gpt-4o"
//! export AZURE_API_KEY="..."
//! export AZURE_API_VERSION="2024-02-15-preview"
//!
//! advisor analyze "Microsoft Corporation" 2025-03-18 2025-03-19
//! advisor invoke greet '{"name": "Ada"}'
//! ```

use advisor_core::AdvisorAgent;
use advisor_finance::{AdvisorConfig, AnalysisOutcome, FinancialAnalyst, SymbolMap, build_agent};
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "advisor")]
#[command(about = "Financial advisor agent: trend signal and LLM insight for listed companies", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a company over a date range
    Analyze {
        /// Company display name, e.g. "Microsoft Corporation"
        company: String,
        /// Start date (YYYY-MM-DD)
        from: String,
        /// End date (YYYY-MM-DD)
        to: String,
    },
    /// List the known companies and their tickers
    Tickers,
    /// List the agent's capabilities
    Capabilities,
    /// Invoke a capability with JSON arguments
    Invoke {
        /// Capability name
        name: String,
        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },
}

fn load_config() -> anyhow::Result<AdvisorConfig> {
    let config = AdvisorConfig::from_lookup(advisor_utils::env_lookup)
        .context("Failed to read configuration")?;

    let missing = config.missing_settings();
    if !missing.is_empty() {
        warn!("Unset settings, requests depending on them will fail: {}", missing.join(", "));
    }

    Ok(config)
}

async fn analyze(company: &str, from: &str, to: &str) -> anyhow::Result<()> {
    let config = load_config()?;
    let analyst = FinancialAnalyst::from_config(&config)?;

    match analyst.analyze(company, from, to).await {
        AnalysisOutcome::Completed(result) => {
            println!("Trend:   {}", result.trend.as_str().to_uppercase());
            println!("Insight: {}", result.insight);
        }
        failed @ AnalysisOutcome::Failed(_) => println!("{failed}"),
    }

    Ok(())
}

fn tickers() {
    let symbols = SymbolMap::builtin();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Company", "Ticker"]);
    for (company, ticker) in symbols.entries() {
        table.add_row(vec![company, ticker]);
    }

    println!("{table}");
    println!("{} companies", symbols.len());
}

fn agent() -> anyhow::Result<AdvisorAgent> {
    let config = load_config()?;
    Ok(build_agent(&config)?)
}

fn capabilities() -> anyhow::Result<()> {
    let agent = agent()?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Capability", "Description"]);
    for capability in agent.capabilities().list() {
        table.add_row(vec![capability.name(), capability.description()]);
    }

    println!("{table}");
    Ok(())
}

async fn invoke(name: &str, args: &str) -> anyhow::Result<()> {
    let args: serde_json::Value =
        serde_json::from_str(args).context("Arguments must be a JSON object")?;
    let agent = agent()?;

    let reply = agent.invoke(name, args).await?;
    println!("{reply}");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may set RUST_LOG and LOG_FORMAT, so it is read first and reported after
    let env_file = advisor_utils::load_env_file();
    advisor_utils::init_tracing();
    match env_file {
        Ok(Some(path)) => debug!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => warn!("Ignoring unreadable .env file: {e}"),
    }

    let args = Args::parse();
    info!("Starting advisor");

    match args.command {
        Command::Analyze { company, from, to } => analyze(&company, &from, &to).await,
        Command::Tickers => {
            tickers();
            Ok(())
        }
        Command::Capabilities => capabilities(),
        Command::Invoke { name, args } => invoke(&name, &args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let args = Args::parse_from(["advisor", "analyze", "Apple Inc", "2025-03-18", "2025-03-19"]);
        match args.command {
            Command::Analyze { company, from, to } => {
                assert_eq!(company, "Apple Inc");
                assert_eq!(from, "2025-03-18");
                assert_eq!(to, "2025-03-19");
            }
            other => panic!("Expected Analyze, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_invoke_default_args() {
        let args = Args::parse_from(["advisor", "invoke", "greet"]);
        assert!(matches!(args.command, Command::Invoke { ref args, .. } if args == "{}"));
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
