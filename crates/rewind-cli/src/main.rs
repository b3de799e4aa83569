mod db;
mod stores;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rewind-cli")]
#[command(about = "Rewind store catalog and recommendation command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Query the catalog the same way `GET /stores` does
    Stores {
        /// Decade label, e.g. 1980s
        #[arg(long)]
        decade: Option<String>,
        /// Comma-separated style tags
        #[arg(long)]
        styles: Option<String>,
    },
    /// Ask Gemini to rank stores for a decade, as `POST /stores/gemini` does
    Recommend {
        /// Decade label, e.g. 1990s
        #[arg(long)]
        decade: String,
        /// Comma-separated style names
        #[arg(long)]
        styles: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check that the database is reachable
    Ping,
    /// Apply pending migrations
    Migrate,
    /// Upsert the store catalog from YAML
    Seed {
        /// Catalog file to load; defaults to `REWIND_STORES_PATH`
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(std::env::var("REWIND_LOG_LEVEL").unwrap_or_else(|_| "info".into()))
    })?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Db { command }) => match command {
            DbCommands::Ping => db::run_ping().await?,
            DbCommands::Migrate => db::run_migrate().await?,
            DbCommands::Seed { path } => db::run_seed(path).await?,
        },
        Some(Commands::Stores { decade, styles }) => {
            stores::run_stores(decade.as_deref(), styles.as_deref()).await?;
        }
        Some(Commands::Recommend { decade, styles }) => {
            stores::run_recommend(&decade, styles).await?;
        }
        None => println!("rewind-cli: run with --help to list commands"),
    }

    Ok(())
}
