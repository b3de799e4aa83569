//! Domain types, configuration, and the store recommendation engine for Rewind.
//!
//! The engine in [`recommend`] only talks to its two collaborators through the
//! [`StoreRepository`] and [`RankingAssistant`] traits; `rewind-db` and
//! `rewind-gemini` provide the production implementations.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod normalize;
pub mod periods;
pub mod recommend;
pub mod stores;

use thiserror::Error;

pub use app_config::{AppConfig, DbConfig, Environment};
pub use catalog::{load_store_catalog, StoreCatalog, StoreConfig};
pub use config::{
    load_app_config, load_app_config_from_env, load_db_config, load_db_config_from_env,
};
pub use normalize::{normalize_decade, parse_style_tags, StylesInput};
pub use periods::{
    find_period, list_periods, KeyPiece, RevivalPoint, StylePeriod, TimelineEvent,
};
pub use recommend::{
    query_with_broadening, AssistantError, RankingAssistant, RecommendError, RecommendationEngine,
    RepositoryError, StoreQuery, StoreRepository, CANDIDATE_POOL_LIMIT, MIN_RESULTS, PRIMARY_LIMIT,
};
pub use stores::{
    CombinedResult, ExtraSuggestion, PlaceholderStore, RankedItem, RankingRequest, RankingResult,
    RecommendedStore, Store, StoreSource,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read store catalog {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse store catalog: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("invalid store catalog: {0}")]
    Validation(String),
}
