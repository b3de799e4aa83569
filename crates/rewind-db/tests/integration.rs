//! Offline unit tests for rewind-db pool configuration and row mapping.
//! These tests do not require a live database connection.

use chrono::Utc;
use rewind_core::{AppConfig, DbConfig, Environment, Store};
use rewind_db::{PoolConfig, StoreRow};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use uuid::Uuid;

fn db_config() -> DbConfig {
    DbConfig {
        database_url: "postgres://example".to_string(),
        stores_path: PathBuf::from("./config/stores.yaml"),
        max_connections: 42,
        min_connections: 7,
        acquire_timeout_secs: 9,
    }
}

#[test]
fn pool_config_from_db_config_copies_pool_settings() {
    let pool_config = PoolConfig::from_db_config(&db_config());
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        db: db_config(),
        gemini_api_key: "key".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5001),
        log_level: "info".to_string(),
        gemini_model: "gemini-1.5-pro".to_string(),
        gemini_timeout_secs: 60,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn store_row_maps_into_store() {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let row = StoreRow {
        id,
        name: "Depop".to_string(),
        url: "https://www.depop.com".to_string(),
        description: "Vintage 90s fashion marketplace".to_string(),
        decades: vec!["1990s".to_string()],
        style_tags: vec!["grunge".to_string()],
        is_small_business: true,
        rating: 4.8,
        created_at: now,
        updated_at: now,
    };

    let store = Store::from(row);
    assert_eq!(store.id, id);
    assert_eq!(store.name, "Depop");
    assert_eq!(store.style_tags, vec!["grunge".to_string()]);
    assert!(store.is_small_business);
    assert!((store.rating - 4.8).abs() < f64::EPSILON);
}
