//! `db` subcommand handlers.

use std::path::PathBuf;

/// Connect and run `SELECT 1`.
///
/// # Errors
///
/// Returns an error if the database settings are invalid, the pool cannot
/// connect, or the ping fails.
pub(crate) async fn run_ping() -> anyhow::Result<()> {
    let config = rewind_core::load_db_config()?;
    let pool = rewind_db::connect_pool_from_config(&config).await?;
    rewind_db::health_check(&pool).await?;
    println!("database ok");
    Ok(())
}

/// Apply pending migrations and report how many ran.
///
/// # Errors
///
/// Returns an error if the database settings are invalid, the pool cannot
/// connect, or a migration fails.
pub(crate) async fn run_migrate() -> anyhow::Result<()> {
    let config = rewind_core::load_db_config()?;
    let pool = rewind_db::connect_pool_from_config(&config).await?;
    let applied = rewind_db::run_migrations(&pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}

/// Load the YAML catalog and upsert every store.
///
/// `path` overrides `REWIND_STORES_PATH`. The catalog is validated before any
/// connection is opened.
///
/// # Errors
///
/// Returns an error if the database settings or the catalog are invalid, the
/// pool cannot connect, or the upsert transaction fails.
pub(crate) async fn run_seed(path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = rewind_core::load_db_config()?;
    let path = path.unwrap_or_else(|| config.stores_path.clone());

    let catalog = rewind_core::load_store_catalog(&path)?;
    tracing::info!(path = %path.display(), stores = catalog.stores.len(), "loaded store catalog");

    let pool = rewind_db::connect_pool_from_config(&config).await?;
    rewind_db::run_migrations(&pool).await?;
    let count = rewind_db::seed_stores(&pool, &catalog.stores).await?;
    println!("seeded {count} store(s) from {}", path.display());
    Ok(())
}
