//! Company display name to ticker symbol mapping

use crate::error::{AdvisorError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, LazyLock};

/// Curated company/ticker pairs shipped with the advisor
const BUILTIN_SYMBOLS: &[(&str, &str)] = &[
    ("Microsoft Corporation", "MSFT"),
    ("Apple Inc", "AAPL"),
    ("Amazon.com Inc", "AMZN"),
    ("Alphabet Inc - Class C", "GOOG"),
    ("Alphabet Inc - Class A", "GOOGL"),
    ("Alibaba Group Holding Ltd", "BABA"),
    ("Meta Platforms Inc - Class A", "FB"),
    ("Vodafone Group plc", "VOD"),
    ("Visa Inc - Class A", "V"),
    ("JPMorgan Chase & Company", "JPM"),
    ("Johnson & Johnson", "JNJ"),
    ("Walmart Inc", "WMT"),
    ("Mastercard Incorporated - Class A", "MA"),
    ("Procter & Gamble Company", "PG"),
    ("Taiwan Semiconductor Manufacturing", "TSM"),
    ("Chunghwa Telecom", "CHT"),
    ("Roche Holding AG", "RHHBY"),
    ("AT&T Inc", "T"),
    ("Unitedhealth Group Inc", "UNH"),
    ("Bank Of America Corp", "BAC"),
    ("Home Depot Inc", "HD"),
    ("Intel Corp", "INTC"),
    ("Coca-Cola Company", "KO"),
    ("Verizon Communications Inc", "VZ"),
    ("Exxon Mobil Corp", "XOM"),
    ("Walt Disney Co (The)", "DIS"),
    ("Merck & Co Inc", "MRK"),
    ("Novartis AG", "NVS"),
    ("Comcast Corp - Class A", "CMCSA"),
    ("Pfizer Inc", "PFE"),
    ("PepsiCo Inc", "PEP"),
    ("Toyota Motor Corporation", "TM"),
    ("Chevron Corp", "CVX"),
    ("Adobe Inc", "ADBE"),
    ("Cisco Systems Inc", "CSCO"),
    ("Wells Fargo & Company", "WFC"),
    ("NVIDIA Corp", "NVDA"),
    ("Netflix Inc", "NFLX"),
    ("Oracle Corp", "ORCL"),
    ("Boeing Company", "BA"),
    ("Salesforce Inc", "CRM"),
    ("Sap SE", "SAP"),
    ("McDonald`s Corp", "MCD"),
    ("Nike Inc - Class B", "NKE"),
    ("Abbott Laboratories", "ABT"),
    ("Citigroup Inc", "C"),
    ("Medtronic Plc", "MDT"),
    ("HSBC Holdings plc", "HSBC"),
    ("Tesla Inc", "TSLA"),
    ("Costco Wholesale Corp", "COST"),
    ("Bristol-Myers Squibb Company", "BMY"),
    ("PayPal Holdings Inc", "PYPL"),
    ("Philip Morris International Inc", "PM"),
    ("NextEra Energy Inc", "NEE"),
    ("Abbvie Inc", "ABBV"),
    ("Lilly(Eli) & Company", "LLY"),
    ("AMGEN Inc", "AMGN"),
    ("Sanofi", "SNY"),
    ("Thermo Fisher Scientific Inc", "TMO"),
    ("ASML Holding NV", "ASML"),
    ("Astrazeneca plc", "AZN"),
    ("Accenture plc - Class A", "ACN"),
    ("International Business Machines Corp", "IBM"),
    ("Honeywell International Inc", "HON"),
    ("TotalEnergies SE", "TOT"),
    ("Broadcom Inc", "AVGO"),
    ("Texas Instruments Inc", "TXN"),
    ("Novo Nordisk", "NVO"),
    ("Union Pacific Corp", "UNP"),
    ("Royal Bank Of Canada", "RY"),
    ("BP plc", "BP"),
    ("Lockheed Martin Corp", "LMT"),
    ("American Tower Corp", "AMT"),
    ("Linde Plc.", "LIN"),
    ("GSK Plc", "GSK"),
    ("Danaher Corp", "DHR"),
    ("Charter Communications Inc - Class A", "CHTR"),
    ("HDFC Bank Ltd", "HDB"),
    ("General Electric Company", "GE"),
    ("Starbucks Corp", "SBUX"),
    ("Anheuser-Busch InBev SA/NV", "BUD"),
    ("Gilead Sciences Inc", "GILD"),
    ("Toronto Dominion Bank", "TD"),
    ("Sinopec Shanghai Petrochemical Co. Ltd", "SHI"),
    ("Qualcomm Inc", "QCOM"),
    ("American Express Company", "AXP"),
    ("Fidelity National Information Services Inc", "FIS"),
    ("British American Tobacco Plc", "BTI"),
    ("3M Company", "MMM"),
    ("Lowe`s Cos. Inc", "LOW"),
    ("Diageo plc", "DEO"),
    ("CVS Health Corp", "CVS"),
    ("T-Mobile US Inc", "TMUS"),
    ("Mondelez International Inc - Class A", "MDLZ"),
    ("United Parcel Service Inc - Class B", "UPS"),
    ("Deutsche Telekom AG", "DTEGY"),
    ("Sony Corporation.", "SNE"),
    ("Altria Group Inc", "MO"),
];

static BUILTIN: LazyLock<Arc<SymbolMap>> =
    LazyLock::new(|| Arc::new(SymbolMap::from_pairs(BUILTIN_SYMBOLS.iter().copied())));

/// Read-only mapping from exact company display name to ticker
///
/// Lookups are case-sensitive and perform no normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMap {
    symbols: BTreeMap<String, String>,
}

impl SymbolMap {
    /// Shared instance of the built-in table
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Build a map from (company, ticker) pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            symbols: pairs
                .into_iter()
                .map(|(name, ticker)| (name.into(), ticker.into()))
                .collect(),
        }
    }

    /// Resolve a company display name to its ticker
    pub fn resolve(&self, company_name: &str) -> Result<&str> {
        self.symbols
            .get(company_name)
            .map(String::as_str)
            .ok_or_else(|| AdvisorError::NotFound(company_name.to_string()))
    }

    /// All configured tickers
    pub fn tickers(&self) -> BTreeSet<&str> {
        self.symbols.values().map(String::as_str).collect()
    }

    /// (company, ticker) pairs ordered by company name
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.symbols.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of companies
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
