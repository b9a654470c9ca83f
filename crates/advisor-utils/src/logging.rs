//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the output format ("json" or anything else for text)
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Initialize the tracing subscriber
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Setting
/// `LOG_FORMAT=json` switches to structured JSON lines. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_VAR).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Tracing already initialized: {e}");
    }
}
