//! Repository for the `collections` table.

use sqlx::PgPool;
use storefront_core::catalog::slug_or_default;
use storefront_core::types::DbId;

use crate::models::collection::{Collection, CreateCollection, UpdateCollection};

/// Distinct products under any subcollection of collection `c`.
const PRODUCTS_COUNT: &str = "(SELECT COUNT(DISTINCT p.id) FROM subcollections s \
                              JOIN products p ON p.subcollection_id = s.id \
                              WHERE s.collection_id = c.id) AS products_count";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "c.id, c.title, c.slug, c.featured_product_id, c.created_at, c.updated_at";

/// Provides CRUD operations for collections.
pub struct CollectionRepo;

impl CollectionRepo {
    /// Insert a new collection, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCollection,
    ) -> Result<Collection, sqlx::Error> {
        let slug = slug_or_default(input.slug.as_deref(), &input.title);
        let query = format!(
            "WITH c AS (
                INSERT INTO collections (title, slug, featured_product_id)
                VALUES ($1, $2, $3)
                RETURNING *
             )
             SELECT {COLUMNS}, {PRODUCTS_COUNT} FROM c"
        );
        sqlx::query_as::<_, Collection>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(input.featured_product_id)
            .fetch_one(pool)
            .await
    }

    /// Find a collection by ID, annotated with its product count.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Collection>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS}, {PRODUCTS_COUNT} FROM collections c WHERE c.id = $1");
        sqlx::query_as::<_, Collection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all collections ordered by ID, annotated with product counts.
    pub async fn list(pool: &PgPool) -> Result<Vec<Collection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS}, {PRODUCTS_COUNT} FROM collections c ORDER BY c.id");
        sqlx::query_as::<_, Collection>(&query).fetch_all(pool).await
    }

    /// Replace every writable field of a collection.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateCollection,
    ) -> Result<Option<Collection>, sqlx::Error> {
        let slug = slug_or_default(input.slug.as_deref(), &input.title);
        let query = format!(
            "WITH c AS (
                UPDATE collections SET title = $2, slug = $3, featured_product_id = $4
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS}, {PRODUCTS_COUNT} FROM c"
        );
        sqlx::query_as::<_, Collection>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(slug)
            .bind(input.featured_product_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a collection. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCollection,
    ) -> Result<Option<Collection>, sqlx::Error> {
        let query = format!(
            "WITH c AS (
                UPDATE collections SET
                    title = COALESCE($2, title),
                    slug = COALESCE($3, slug),
                    featured_product_id = COALESCE($4, featured_product_id)
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS}, {PRODUCTS_COUNT} FROM c"
        );
        sqlx::query_as::<_, Collection>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.slug.as_deref().filter(|s| !s.trim().is_empty()))
            .bind(input.featured_product_id)
            .fetch_optional(pool)
            .await
    }

    /// Number of distinct products under any of the collection's
    /// subcollections.
    pub async fn count_products(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT p.id) FROM subcollections s
             JOIN products p ON p.subcollection_id = s.id
             WHERE s.collection_id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Delete a collection and its subcollections. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
