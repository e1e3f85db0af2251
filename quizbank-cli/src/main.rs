//! quizbank CLI - serve and administer the quiz question API
//!
//! - `serve`: run the HTTP server
//! - `init-db`: create the schema and exit
//! - `config`: inspect or initialize `~/.quizbank/config.toml`

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::QuizbankConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "quizbank",
    author,
    version,
    about = "HTTP service for quiz questions and their multiple-choice answers"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the database schema and exit
    InitDb(commands::init_db::InitDbArgs),
    /// Manage quizbank configuration (init, show, path)
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, QuizbankConfig::load()?).await,
        Commands::InitDb(args) => commands::run_init_db(args, QuizbankConfig::load()?).await,
        Commands::Config(args) => config::run_config(args),
    }
}
