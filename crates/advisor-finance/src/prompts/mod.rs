//! Prompt text for the advisor agent and the insight request

use crate::error::Result;
use crate::series::TickerEntry;
use minijinja::{Environment, context};

/// System prompt the agent shell presents to its platform
pub const AGENT_SYSTEM_PROMPT: &str = "You are a financial assistant. You provide financial advice and analysis to users. \
You can greet users by name, bid farewell, and analyze financial data for a given company within a date range. \
You can help users by:
- Analyzing financial data for a given company within a date range
- Providing insights and trends based on financial data
- Offering general financial advice based on the analysis";

/// System message sent with every insight request
pub const INSIGHT_SYSTEM_PROMPT: &str = "You are a financial advisor analyzing historical stock data.";

/// Instruction wrapped around the rendered series
const INSIGHT_TEMPLATE: &str = "Analyze the following stock performance data for financial decision-making. \
Based on the trend, volume, and price actions, should the investor consider a \"buy\", \"sell\", or \"neutral\" position? \
Provide a short justification. Only respond with the JSON format without any additional text\n\n{{ summary }}";

/// Render one entry as a prompt line; missing values read `null`
pub fn render_entry(entry: &TickerEntry) -> String {
    format!(
        "Date: {}, Open: {}, Close: {}, High: {}, Low: {}, Volume: {}",
        entry.date,
        or_null(entry.open),
        or_null(entry.close),
        or_null(entry.high),
        or_null(entry.low),
        or_null(entry.volume)
    )
}

fn or_null<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

/// Render entries one per line, in the order given
pub fn render_series<'a>(entries: impl IntoIterator<Item = &'a TickerEntry>) -> String {
    entries
        .into_iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the user prompt for an already sorted series
pub fn insight_prompt<'a>(entries: impl IntoIterator<Item = &'a TickerEntry>) -> Result<String> {
    let env = Environment::new();
    let prompt = env.render_str(INSIGHT_TEMPLATE, context! { summary => render_series(entries) })?;
    Ok(prompt)
}
