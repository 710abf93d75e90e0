//! Structured logging setup.
//!
//! JSON lines in production, human-readable output everywhere else.
//! `RUST_LOG` wins over the configured `log_level` when set.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServerConfig;

/// Build the filter from `RUST_LOG`, falling back to `default_directive`.
pub fn env_filter(default_directive: &str) -> Result<EnvFilter> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_directive))?;
    Ok(filter)
}

/// Install the global subscriber. Call once, before the server starts.
pub fn init_tracing(config: &ServerConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(&config.log_level)?);

    if config.is_production() {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(true).with_level(true))
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_parses() {
        let config = ServerConfig::default();
        assert!(env_filter(&config.log_level).is_ok());
    }
}
