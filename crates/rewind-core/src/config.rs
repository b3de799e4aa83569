use std::env::VarError;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::{AppConfig, DbConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load only the database settings, after loading `.env` files.
///
/// `GEMINI_API_KEY` is not read.
///
/// # Errors
///
/// Returns `ConfigError` if `DATABASE_URL` is missing or a pool setting is invalid.
pub fn load_db_config() -> Result<DbConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_db_config_from_env()
}

/// Load only the database settings from the process environment.
///
/// # Errors
///
/// Returns `ConfigError` if `DATABASE_URL` is missing or a pool setting is invalid.
pub fn load_db_config_from_env() -> Result<DbConfig, ConfigError> {
    build_db_config(&|key: &str| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let db = build_db_config(&lookup)?;
    let gemini_api_key = require(&lookup, "GEMINI_API_KEY")?;

    let env = parse_environment(&or_default(&lookup, "REWIND_ENV", "development"))?;

    let bind_addr = parse_var::<SocketAddr, _>(&lookup, "REWIND_BIND_ADDR", "0.0.0.0:5001")?;
    let log_level = or_default(&lookup, "REWIND_LOG_LEVEL", "info");

    let gemini_model = or_default(&lookup, "GEMINI_MODEL", "gemini-1.5-pro");
    let gemini_timeout_secs = parse_var::<u64, _>(&lookup, "GEMINI_TIMEOUT_SECS", "60")?;

    Ok(AppConfig {
        db,
        gemini_api_key,
        env,
        bind_addr,
        log_level,
        gemini_model,
        gemini_timeout_secs,
    })
}

fn build_db_config<F>(lookup: &F) -> Result<DbConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let database_url = require(lookup, "DATABASE_URL")?;
    let stores_path = PathBuf::from(or_default(
        lookup,
        "REWIND_STORES_PATH",
        "./config/stores.yaml",
    ));

    let max_connections = parse_var::<u32, _>(lookup, "REWIND_DB_MAX_CONNECTIONS", "10")?;
    let min_connections = parse_var::<u32, _>(lookup, "REWIND_DB_MIN_CONNECTIONS", "1")?;
    let acquire_timeout_secs =
        parse_var::<u64, _>(lookup, "REWIND_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(DbConfig {
        database_url,
        stores_path,
        max_connections,
        min_connections,
        acquire_timeout_secs,
    })
}

/// Read a required variable; blank values count as missing.
fn require<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    lookup(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn or_default<F>(lookup: &F, var: &str, default: &str) -> String
where
    F: Fn(&str) -> Result<String, VarError>,
{
    lookup(var).unwrap_or_else(|_| default.to_string())
}

/// Parse a variable (or its default) and reject values that do not parse.
fn parse_var<T, F>(lookup: &F, var: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Result<String, VarError>,
{
    or_default(lookup, var, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "REWIND_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
