//! HTTP server command
//!
//! Opens the pool, makes sure the schema exists, and serves until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use quizbank_server::db::{create_pool_with_options, schema};
use quizbank_server::{run_server, ServerConfig};

use crate::config::QuizbankConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    /// Merge flags over the loaded config.
    pub fn resolve(self, config: QuizbankConfig) -> (String, u32, ServerConfig) {
        let database_url = self.database_url.unwrap_or(config.database_url);
        let max_connections = self.max_connections.unwrap_or(config.max_connections);
        let server = ServerConfig {
            bind_addr: self.bind.unwrap_or(config.bind),
            cors_permissive: self.cors_permissive || config.cors_permissive,
            request_timeout: Duration::from_secs(self.timeout.unwrap_or(config.request_timeout_secs)),
        };
        (database_url, max_connections, server)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: QuizbankConfig) -> Result<()> {
    let (database_url, max_connections, server_config) = args.resolve(config);

    tracing::info!("Starting quizbank server on {}", server_config.bind_addr);

    let pool = create_pool_with_options(&database_url, max_connections)
        .await
        .with_context(|| format!("Failed to open database {database_url}"))?;

    schema::run(&pool)
        .await
        .context("Failed to create database schema")?;

    // Blocks until shutdown
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> ServeArgs {
        ServeArgs::parse_from(std::iter::once("serve").chain(list.iter().copied()))
    }

    #[test]
    fn flags_override_config() {
        let (url, max, server) = args(&[
            "--bind",
            "0.0.0.0:9999",
            "--database-url",
            "sqlite://flag.db",
            "--max-connections",
            "2",
            "--timeout",
            "5",
        ])
        .resolve(QuizbankConfig::default());

        assert_eq!(url, "sqlite://flag.db");
        assert_eq!(max, 2);
        assert_eq!(server.bind_addr.port(), 9999);
        assert_eq!(server.request_timeout, Duration::from_secs(5));
        assert!(!server.cors_permissive);
    }

    #[test]
    fn config_fills_missing_flags() {
        let config = QuizbankConfig {
            database_url: "sqlite://file.db".into(),
            cors_permissive: true,
            ..QuizbankConfig::default()
        };

        let (url, max, server) = args(&[]).resolve(config);
        assert_eq!(url, "sqlite://file.db");
        assert_eq!(max, 5);
        assert_eq!(server.bind_addr.port(), 8000);
        assert!(server.cors_permissive);
    }
}
