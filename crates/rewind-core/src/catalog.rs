use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::stores::DEFAULT_RATING;
use crate::ConfigError;

fn default_rating() -> f64 {
    DEFAULT_RATING
}

/// One store entry of the seed catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub decades: Vec<String>,
    #[serde(default)]
    pub style_tags: Vec<String>,
    #[serde(default)]
    pub is_small_business: bool,
    #[serde(default = "default_rating")]
    pub rating: f64,
}

#[derive(Debug, Deserialize)]
pub struct StoreCatalog {
    pub stores: Vec<StoreConfig>,
}

/// Load, normalize, and validate the store catalog from a YAML file.
///
/// Style tags are lowercased and trimmed; decades are trimmed.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_store_catalog(path: &Path) -> Result<StoreCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_store_catalog(&content)
}

fn parse_store_catalog(content: &str) -> Result<StoreCatalog, ConfigError> {
    let mut catalog: StoreCatalog =
        serde_yaml::from_str(content).map_err(ConfigError::CatalogFileParse)?;

    for store in &mut catalog.stores {
        normalize_store(store);
    }

    validate_stores(&catalog)?;

    Ok(catalog)
}

fn normalize_store(store: &mut StoreConfig) {
    store.name = store.name.trim().to_owned();
    store.url = store.url.trim().to_owned();
    store.decades = store
        .decades
        .iter()
        .map(|d| d.trim().to_owned())
        .filter(|d| !d.is_empty())
        .collect();
    store.style_tags = store
        .style_tags
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
}

fn validate_stores(catalog: &StoreCatalog) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for store in &catalog.stores {
        if store.name.is_empty() {
            return Err(ConfigError::Validation(
                "store name must be non-empty".to_string(),
            ));
        }

        if store.url.is_empty() {
            return Err(ConfigError::Validation(format!(
                "store '{}' must have a url",
                store.name
            )));
        }

        if !(0.0..=5.0).contains(&store.rating) {
            return Err(ConfigError::Validation(format!(
                "store '{}' has invalid rating {}; must be between 0 and 5",
                store.name, store.rating
            )));
        }

        if !seen.insert((store.name.as_str(), store.url.as_str())) {
            return Err(ConfigError::Validation(format!(
                "duplicate store: '{}' at {}",
                store.name, store.url
            )));
        }
    }

    Ok(())
}
