//! Store recommendation engine.
//!
//! Two read paths share one repository:
//!
//! - [`RecommendationEngine::list_stores`] runs a filtered query and, when a
//!   decade is given and fewer than [`MIN_RESULTS`] stores match, tops the
//!   list up with the best-rated remaining stores of that decade.
//! - [`RecommendationEngine::recommend`] fetches a candidate pool for a
//!   decade, asks the ranking assistant to order it, merges the ranking back
//!   onto the pool, and backfills to [`MIN_RESULTS`] entries.

use std::collections::{HashMap, HashSet};
use std::error::Error as StdError;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::stores::{
    CombinedResult, PlaceholderStore, RankedItem, RankingRequest, RankingResult,
    RecommendedStore, Store, StoreSource,
};

/// Floor for the plain path's broadening step and ceiling for the AI path.
pub const MIN_RESULTS: usize = 5;

/// Cap on the first query of the plain path.
pub const PRIMARY_LIMIT: i64 = 20;

/// Cap on the candidate pool handed to the ranking assistant.
pub const CANDIDATE_POOL_LIMIT: i64 = 50;

/// A filtered, rating-ordered store lookup.
///
/// `style_tags` empty means no tag constraint; otherwise a store matches when
/// it carries at least one of the tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreQuery {
    pub decade: Option<String>,
    pub style_tags: Vec<String>,
    pub exclude_ids: Vec<Uuid>,
    pub limit: i64,
}

#[derive(Debug, Error)]
#[error("store query failed: {source}")]
pub struct RepositoryError {
    #[source]
    source: Box<dyn StdError + Send + Sync>,
}

impl RepositoryError {
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AssistantError {
    /// The call itself failed: network, auth, quota, or an empty envelope.
    #[error("ranking assistant request failed: {0}")]
    Transport(String),

    /// The assistant answered, but not with the expected JSON shape.
    ///
    /// `raw` is kept for server-side logs and never shown to callers.
    #[error("ranking assistant returned unparseable output: {reason}")]
    Output { reason: String, raw: String },
}

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Query(#[from] RepositoryError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),
}

/// Read access to the store catalog.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Return stores matching `query`, ordered by rating descending, at most
    /// `query.limit` of them.
    async fn find_stores(&self, query: &StoreQuery) -> Result<Vec<Store>, RepositoryError>;
}

/// External ranker for a candidate pool.
#[async_trait]
pub trait RankingAssistant: Send + Sync {
    async fn rank(&self, request: &RankingRequest) -> Result<RankingResult, AssistantError>;
}

#[derive(Clone)]
pub struct RecommendationEngine {
    stores: Arc<dyn StoreRepository>,
    assistant: Arc<dyn RankingAssistant>,
}

impl RecommendationEngine {
    #[must_use]
    pub fn new(stores: Arc<dyn StoreRepository>, assistant: Arc<dyn RankingAssistant>) -> Self {
        Self { stores, assistant }
    }

    /// Plain query path; see [`query_with_broadening`].
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::Query`] if either repository query fails.
    pub async fn list_stores(
        &self,
        decade: Option<&str>,
        style_tags: &[String],
    ) -> Result<Vec<Store>, RecommendError> {
        query_with_broadening(self.stores.as_ref(), decade, style_tags).await
    }

    /// AI-augmented ranking path.
    ///
    /// Either a complete [`CombinedResult`] is produced or the whole call
    /// fails; nothing from a half-finished request is returned or kept.
    ///
    /// # Errors
    ///
    /// - [`RecommendError::Validation`] if `decade` is blank. No collaborator
    ///   is called in that case.
    /// - [`RecommendError::Query`] if the candidate pool query fails.
    /// - [`RecommendError::Assistant`] if the assistant call fails or its
    ///   output cannot be parsed.
    pub async fn recommend(
        &self,
        decade: &str,
        styles: Vec<String>,
    ) -> Result<CombinedResult, RecommendError> {
        let decade = decade.trim();
        if decade.is_empty() {
            return Err(RecommendError::Validation("decade is required".to_string()));
        }

        let pool_query = StoreQuery {
            decade: Some(decade.to_owned()),
            style_tags: Vec::new(),
            exclude_ids: Vec::new(),
            limit: CANDIDATE_POOL_LIMIT,
        };
        let candidate_stores = self.stores.find_stores(&pool_query).await?;

        let request = RankingRequest {
            decade: decade.to_owned(),
            style_tags: styles,
            candidate_stores,
        };

        let ranking = match self.assistant.rank(&request).await {
            Ok(ranking) => ranking,
            Err(e) => {
                match &e {
                    AssistantError::Output { reason, raw } => tracing::error!(
                        decade,
                        reason = %reason,
                        raw = %raw,
                        "ranking assistant returned unparseable output"
                    ),
                    AssistantError::Transport(message) => tracing::error!(
                        decade,
                        error = %message,
                        "ranking assistant request failed"
                    ),
                }
                return Err(e.into());
            }
        };

        let stores = merge_ranked(&request.candidate_stores, &ranking.ranked_existing);

        Ok(CombinedResult {
            decade: request.decade,
            styles: request.style_tags,
            stores,
            ai_extra_suggestions: ranking.extra_suggestions,
        })
    }
}

/// Filtered store lookup that tops up short decade results.
///
/// The first query is capped at [`PRIMARY_LIMIT`]. When a decade is given and
/// fewer than [`MIN_RESULTS`] stores match, a second query drops the tag
/// constraint, excludes what was already found, and asks only for the
/// shortfall. The two batches are concatenated without re-sorting, so the
/// result can be longer than [`MIN_RESULTS`].
///
/// # Errors
///
/// Returns [`RecommendError::Query`] if either repository query fails.
pub async fn query_with_broadening(
    repo: &dyn StoreRepository,
    decade: Option<&str>,
    style_tags: &[String],
) -> Result<Vec<Store>, RecommendError> {
    let primary = StoreQuery {
        decade: decade.map(ToOwned::to_owned),
        style_tags: style_tags.to_vec(),
        exclude_ids: Vec::new(),
        limit: PRIMARY_LIMIT,
    };
    let mut stores = repo.find_stores(&primary).await?;

    if let Some(decade) = decade {
        if stores.len() < MIN_RESULTS {
            let shortfall = MIN_RESULTS - stores.len();
            let broader = StoreQuery {
                decade: Some(decade.to_owned()),
                style_tags: Vec::new(),
                exclude_ids: stores.iter().map(|s| s.id).collect(),
                limit: i64::try_from(shortfall).unwrap_or(i64::MAX),
            };
            let extra = repo.find_stores(&broader).await?;
            tracing::debug!(
                decade,
                matched = stores.len(),
                broadened = extra.len(),
                "broadened store query within decade"
            );
            stores.extend(extra);
        }
    }

    Ok(stores)
}

/// Merge the assistant's ranking onto the candidate pool.
///
/// Ranked names are matched case-sensitively against the pool; unmatched
/// names become placeholders. Repeated names keep their first occurrence.
/// Short lists are backfilled from the pool in pool order, and the result
/// never exceeds [`MIN_RESULTS`].
fn merge_ranked(pool: &[Store], ranked: &[RankedItem]) -> Vec<RecommendedStore> {
    let mut by_name: HashMap<&str, &Store> = HashMap::with_capacity(pool.len());
    for store in pool {
        by_name.entry(store.name.as_str()).or_insert(store);
    }

    let mut used: HashSet<&str> = HashSet::new();
    let mut merged: Vec<RecommendedStore> = Vec::with_capacity(MIN_RESULTS);

    for item in ranked {
        if !used.insert(item.name.as_str()) {
            tracing::debug!(name = %item.name, "skipping repeated ranked store");
            continue;
        }

        let source = match by_name.get(item.name.as_str()) {
            Some(store) => StoreSource::Catalog((*store).clone()),
            None => {
                tracing::debug!(name = %item.name, "ranked store not in candidate pool");
                StoreSource::Placeholder(PlaceholderStore::for_name(&item.name))
            }
        };
        merged.push(RecommendedStore::scored(source, item));
    }

    if merged.len() < MIN_RESULTS {
        let shortfall = MIN_RESULTS - merged.len();
        let backfill: Vec<RecommendedStore> = pool
            .iter()
            .filter(|store| used.insert(store.name.as_str()))
            .take(shortfall)
            .cloned()
            .map(RecommendedStore::unscored)
            .collect();
        merged.extend(backfill);
    }

    merged.truncate(MIN_RESULTS);
    merged
}

#[cfg(test)]
#[path = "recommend_test.rs"]
mod tests;
