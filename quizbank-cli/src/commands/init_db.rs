//! Create the database schema without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use quizbank_server::db::{create_pool_with_options, schema};

use crate::config::QuizbankConfig;

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

pub async fn run_init_db(args: InitDbArgs, config: QuizbankConfig) -> Result<()> {
    let database_url = args.database_url.unwrap_or(config.database_url);

    let pool = create_pool_with_options(&database_url, 1)
        .await
        .with_context(|| format!("Failed to open database {database_url}"))?;

    schema::run(&pool)
        .await
        .context("Failed to create database schema")?;
    pool.close().await;

    println!("Schema ready at {database_url}");
    Ok(())
}
