//! Configuration file and the `config` subcommand
//!
//! Resolution order for every setting: command line flag, then environment,
//! then `~/.quizbank/config.toml`, then the built-in default.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// Config file path override
pub const CONFIG_ENV: &str = "QUIZBANK_CONFIG";

/// Settings shared by `serve` and `init-db`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizbankConfig {
    pub database_url: String,
    pub bind: SocketAddr,
    pub max_connections: u32,
    pub request_timeout_secs: u64,
    pub cors_permissive: bool,
}

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://quizbank.db".to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            max_connections: quizbank_server::db::pool::DEFAULT_MAX_CONNECTIONS,
            request_timeout_secs: 30,
            cors_permissive: false,
        }
    }
}

impl QuizbankConfig {
    /// Config file path: $QUIZBANK_CONFIG or ~/.quizbank/config.toml
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quizbank/config.toml")
    }

    /// Load the config file (if any) and apply environment overrides.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load a specific file, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))
    }

    /// Override settings from environment variables (`DATABASE_URL`, `QUIZBANK_BIND`).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(bind) = lookup("QUIZBANK_BIND") {
            self.bind = bind
                .parse()
                .with_context(|| format!("QUIZBANK_BIND is not a socket address: {bind}"))?;
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with the default settings
    Init(InitArgs),
    /// Print the resolved configuration as TOML
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = QuizbankConfig::config_path();

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Config already exists at {}\n\nUse --force to overwrite",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(&QuizbankConfig::default())
        .context("Failed to serialize config to TOML")?;
    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    println!("Created config at: {}", config_path.display());
    Ok(())
}

fn run_show() -> Result<()> {
    let config = QuizbankConfig::load()?;
    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
    println!("{}", toml_str);
    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", QuizbankConfig::config_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = QuizbankConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, QuizbankConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database_url = \"sqlite://other.db\"\nmax_connections = 2\n").unwrap();

        let config = QuizbankConfig::load_from(&path).unwrap();
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.bind.port(), 8000);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_connections = \"many\"").unwrap();

        assert!(QuizbankConfig::load_from(&path).is_err());
    }

    #[test]
    fn env_overrides_file() {
        let mut config = QuizbankConfig::default();
        config
            .apply_env(|key| match key {
                "DATABASE_URL" => Some("sqlite::memory:".into()),
                "QUIZBANK_BIND" => Some("0.0.0.0:9000".into()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind.port(), 9000);
    }

    #[test]
    fn bad_bind_env_is_rejected() {
        let mut config = QuizbankConfig::default();
        let result = config.apply_env(|key| (key == "QUIZBANK_BIND").then(|| "nowhere".into()));
        assert!(result.is_err());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&QuizbankConfig::default()).unwrap();
        let back: QuizbankConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, QuizbankConfig::default());
    }
}
