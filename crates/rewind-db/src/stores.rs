//! Read queries against the `stores` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rewind_core::{RepositoryError, Store, StoreQuery, StoreRepository};
use sqlx::PgPool;
use uuid::Uuid;

/// A row from the `stores` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoreRow {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: String,
    pub decades: Vec<String>,
    pub style_tags: Vec<String>,
    pub is_small_business: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StoreRow> for Store {
    fn from(row: StoreRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            url: row.url,
            description: row.description,
            decades: row.decades,
            style_tags: row.style_tags,
            is_small_business: row.is_small_business,
            rating: row.rating,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Fetch stores matching `query`, best rated first.
///
/// - `decade` is `None` means any decade.
/// - An empty `style_tags` list means any tags; otherwise at least one tag
///   must overlap.
/// - Ties on rating fall back to name, then id, so paging is stable.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn find_stores(pool: &PgPool, query: &StoreQuery) -> Result<Vec<StoreRow>, sqlx::Error> {
    sqlx::query_as::<_, StoreRow>(
        "SELECT id, name, url, description, decades, style_tags, is_small_business, \
                rating, created_at, updated_at \
         FROM stores \
         WHERE ($1::TEXT IS NULL OR $1 = ANY(decades)) \
           AND (cardinality($2::TEXT[]) = 0 OR style_tags && $2::TEXT[]) \
           AND NOT (id = ANY($3::UUID[])) \
         ORDER BY rating DESC, name ASC, id ASC \
         LIMIT $4",
    )
    .bind(query.decade.as_deref())
    .bind(&query.style_tags)
    .bind(&query.exclude_ids)
    .bind(query.limit)
    .fetch_all(pool)
    .await
}

/// [`StoreRepository`] backed by the Postgres `stores` table.
#[derive(Debug, Clone)]
pub struct PgStoreRepository {
    pool: PgPool,
}

impl PgStoreRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn find_stores(&self, query: &StoreQuery) -> Result<Vec<Store>, RepositoryError> {
        let rows = find_stores(&self.pool, query).await.map_err(|e| {
            tracing::error!(error = %e, decade = ?query.decade, "store query failed");
            RepositoryError::new(e)
        })?;
        Ok(rows.into_iter().map(Store::from).collect())
    }
}
