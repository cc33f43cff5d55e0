//! Database initialization command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::db::{create_pool_with_options, init_schema, reset_schema, seed_samples};

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite database file (default: config `database.path`)
    #[arg(long, env = "TODOCTL_DATABASE")]
    pub db_path: Option<PathBuf>,

    /// Drop the todos table (and every item in it) before creating it
    #[arg(long)]
    pub reset: bool,

    /// Insert a handful of sample items after creating the table
    #[arg(long)]
    pub seed: bool,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let config = super::load_config(args.db_path)?;
    let path = &config.database.path;

    let pool = create_pool_with_options(path, config.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", path.display()))?;

    if args.reset {
        reset_schema(&pool).await.context("Failed to reset schema")?;
    } else {
        init_schema(&pool).await.context("Failed to create schema")?;
    }

    if args.seed {
        let count = seed_samples(&pool).await.context("Failed to seed sample items")?;
        println!("Inserted {} sample items.", count);
    }

    pool.close().await;
    println!("Initialized the database.");
    tracing::debug!(path = %path.display(), "init-db complete");
    Ok(())
}
