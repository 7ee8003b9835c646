//! Repository for the `subcollections` table.

use sqlx::PgPool;
use storefront_core::catalog::slug_or_default;
use storefront_core::types::DbId;

use crate::models::subcollection::{CreateSubCollection, SubCollection, UpdateSubCollection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, slug, collection_id, featured_product_id, created_at, updated_at";

/// Provides CRUD operations for subcollections.
pub struct SubCollectionRepo;

impl SubCollectionRepo {
    /// Insert a new subcollection, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubCollection,
    ) -> Result<SubCollection, sqlx::Error> {
        let query = format!(
            "INSERT INTO subcollections (title, slug, collection_id, featured_product_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubCollection>(&query)
            .bind(&input.title)
            .bind(slug_or_default(input.slug.as_deref(), &input.title))
            .bind(input.collection_id)
            .bind(input.featured_product_id)
            .fetch_one(pool)
            .await
    }

    /// Find a subcollection by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SubCollection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subcollections WHERE id = $1");
        sqlx::query_as::<_, SubCollection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the subcollections of one collection, ordered by title.
    pub async fn list_by_collection(
        pool: &PgPool,
        collection_id: DbId,
    ) -> Result<Vec<SubCollection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM subcollections WHERE collection_id = $1 ORDER BY title, id"
        );
        sqlx::query_as::<_, SubCollection>(&query)
            .bind(collection_id)
            .fetch_all(pool)
            .await
    }

    /// Update a subcollection. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubCollection,
    ) -> Result<Option<SubCollection>, sqlx::Error> {
        let query = format!(
            "UPDATE subcollections SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                collection_id = COALESCE($4, collection_id),
                featured_product_id = COALESCE($5, featured_product_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubCollection>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.slug.as_deref().filter(|s| !s.trim().is_empty()))
            .bind(input.collection_id)
            .bind(input.featured_product_id)
            .fetch_optional(pool)
            .await
    }

    /// Number of products in the subcollection.
    pub async fn count_products(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE subcollection_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a subcollection by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subcollections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
