//! One-shot store queries printed as JSON.

use std::sync::Arc;

use anyhow::Context;
use rewind_core::{
    normalize_decade, parse_style_tags, query_with_broadening, RecommendationEngine, StylesInput,
};
use rewind_db::PgStoreRepository;
use rewind_gemini::GeminiClient;
use serde::Serialize;

/// Run the plain query path and print the stores.
///
/// Needs only the database settings; the Gemini key is not read.
///
/// # Errors
///
/// Returns an error if the database settings are invalid, the pool cannot
/// connect, or the query fails.
pub(crate) async fn run_stores(decade: Option<&str>, styles: Option<&str>) -> anyhow::Result<()> {
    let config = rewind_core::load_db_config()?;
    let pool = rewind_db::connect_pool_from_config(&config).await?;
    let repo = PgStoreRepository::new(pool);

    let decade = normalize_decade(decade);
    let style_tags = parse_style_tags(styles);
    let stores = query_with_broadening(&repo, decade.as_deref(), &style_tags).await?;

    print_json(&stores)
}

/// Run the AI-ranked path and print the combined result.
///
/// # Errors
///
/// Returns an error if configuration is incomplete, the pool cannot connect,
/// or the ranking request fails.
pub(crate) async fn run_recommend(decade: &str, styles: Option<String>) -> anyhow::Result<()> {
    let config = rewind_core::load_app_config()?;
    let pool = rewind_db::connect_pool_from_config(&config.db).await?;

    let gemini = GeminiClient::new(
        &config.gemini_api_key,
        &config.gemini_model,
        config.gemini_timeout_secs,
    )?;
    let engine = RecommendationEngine::new(
        Arc::new(PgStoreRepository::new(pool)),
        Arc::new(gemini),
    );

    let styles = styles
        .map(|s| StylesInput::Joined(s).into_styles())
        .unwrap_or_default();
    let result = engine
        .recommend(decade, styles)
        .await
        .with_context(|| format!("recommendation for {decade} failed"))?;

    print_json(&result)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
