//! Console tracing for the quizbank CLI
//!
//! Usage:
//!   quizbank --debug serve              # Debug logging to console
//!   RUST_LOG=quizbank_server=debug quizbank serve
//!
//! `RUST_LOG` wins over `--debug` when both are set.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Default to debug level when RUST_LOG is unset
    pub debug: bool,
}

fn env_filter(config: &TracingConfig) -> EnvFilter {
    let default = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber (compact fmt, targets shown in debug mode).
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error() {
        let config = TracingConfig { debug: true };
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
