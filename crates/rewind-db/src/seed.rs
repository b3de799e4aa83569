use rewind_core::StoreConfig;
use sqlx::PgPool;

use crate::DbError;

/// Upsert catalog stores into the database, keyed on `(name, url)`.
///
/// Returns the number of stores processed (inserted or updated).
/// All upserts run inside a single transaction; if any operation fails
/// the entire batch is rolled back.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_stores(pool: &PgPool, stores: &[StoreConfig]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for store in stores {
        sqlx::query(
            "INSERT INTO stores (name, url, description, decades, style_tags, is_small_business, rating) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (name, url) DO UPDATE SET \
                 description = EXCLUDED.description, \
                 decades = EXCLUDED.decades, \
                 style_tags = EXCLUDED.style_tags, \
                 is_small_business = EXCLUDED.is_small_business, \
                 rating = EXCLUDED.rating, \
                 updated_at = NOW()",
        )
        .bind(&store.name)
        .bind(&store.url)
        .bind(&store.description)
        .bind(&store.decades)
        .bind(&store.style_tags)
        .bind(store.is_small_business)
        .bind(store.rating)
        .execute(&mut *tx)
        .await?;

        count += 1;
    }

    tx.commit().await?;
    tracing::info!(count, "seeded store catalog");
    Ok(count)
}
