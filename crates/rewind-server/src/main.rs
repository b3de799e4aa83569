mod api;
mod middleware;

use std::sync::Arc;

use rewind_core::RecommendationEngine;
use rewind_db::PgStoreRepository;
use rewind_gemini::GeminiClient;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = rewind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = rewind_db::PoolConfig::from_app_config(&config);
    let pool = rewind_db::connect_pool(&config.db.database_url, pool_config).await?;
    let applied = rewind_db::run_migrations(&pool).await?;
    tracing::info!(applied, "database migrations complete");

    let gemini = GeminiClient::new(
        &config.gemini_api_key,
        &config.gemini_model,
        config.gemini_timeout_secs,
    )?;
    let engine = RecommendationEngine::new(
        Arc::new(PgStoreRepository::new(pool)),
        Arc::new(gemini),
    );
    let app = build_app(AppState { engine });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        env = %config.env,
        model = %config.gemini_model,
        "rewind server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
