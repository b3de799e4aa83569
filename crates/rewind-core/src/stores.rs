use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default rating assigned to stores that do not specify one.
pub const DEFAULT_RATING: f64 = 4.0;

/// URL used for assistant-ranked stores that have no catalog match.
pub const PLACEHOLDER_URL: &str = "#";

/// A catalog entry as read back from the store repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: String,
    /// Decade labels such as `"1970s"`.
    pub decades: Vec<String>,
    /// Lowercase style keywords such as `"bell-bottoms"`.
    pub style_tags: Vec<String>,
    pub is_small_business: bool,
    /// Primary sort key, highest first.
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input handed to the ranking assistant for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRequest {
    pub decade: String,
    pub style_tags: Vec<String>,
    pub candidate_stores: Vec<Store>,
}

/// Structured answer from the ranking assistant.
///
/// Both keys are required and no others are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RankingResult {
    /// Best match first.
    pub ranked_existing: Vec<RankedItem>,
    pub extra_suggestions: Vec<ExtraSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedItem {
    pub name: String,
    pub reason: String,
    /// 0 to 100.
    pub score: u8,
}

/// A store the assistant suggests from outside the candidate pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraSuggestion {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Minimal record emitted when the assistant ranks a name the pool does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderStore {
    pub name: String,
    pub url: String,
    pub description: String,
}

impl PlaceholderStore {
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            url: PLACEHOLDER_URL.to_owned(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoreSource {
    Catalog(Store),
    Placeholder(PlaceholderStore),
}

/// One entry of the AI-augmented result list.
///
/// Serializes as the flattened store fields plus `aiScore`/`aiReason` when
/// the assistant scored it. Backfilled entries carry neither.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedStore {
    #[serde(flatten)]
    pub source: StoreSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_reason: Option<String>,
}

impl RecommendedStore {
    #[must_use]
    pub fn scored(source: StoreSource, item: &RankedItem) -> Self {
        Self {
            source,
            ai_score: Some(item.score),
            ai_reason: Some(item.reason.clone()),
        }
    }

    #[must_use]
    pub fn unscored(store: Store) -> Self {
        Self {
            source: StoreSource::Catalog(store),
            ai_score: None,
            ai_reason: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match &self.source {
            StoreSource::Catalog(store) => &store.name,
            StoreSource::Placeholder(placeholder) => &placeholder.name,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match &self.source {
            StoreSource::Catalog(store) => &store.url,
            StoreSource::Placeholder(placeholder) => &placeholder.url,
        }
    }
}

/// Output of the AI-augmented ranking path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResult {
    pub decade: String,
    pub styles: Vec<String>,
    pub stores: Vec<RecommendedStore>,
    pub ai_extra_suggestions: Vec<ExtraSuggestion>,
}
