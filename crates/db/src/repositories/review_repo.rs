//! Repository for the `reviews` table.
//!
//! Every query is scoped to a product: a review is only reachable through
//! the product it belongs to.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::review::{CreateReview, Review, UpdateReview};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, product_id, name, description, created_at, updated_at";

/// Provides product-scoped CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review for `product_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        product_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (product_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(product_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List a product's reviews, oldest first.
    pub async fn list_for_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM reviews WHERE product_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Review>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// Find a review by ID within a product.
    pub async fn find_for_product(
        pool: &PgPool,
        product_id: DbId,
        id: DbId,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1 AND product_id = $2");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(product_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a review's name and description.
    ///
    /// Returns `None` if the review does not exist under `product_id`.
    pub async fn replace(
        pool: &PgPool,
        product_id: DbId,
        id: DbId,
        input: &CreateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET name = $3, description = $4
             WHERE id = $1 AND product_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(product_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Update a review. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the review does not exist under `product_id`.
    pub async fn update(
        pool: &PgPool,
        product_id: DbId,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET
                name = COALESCE($3, name),
                description = COALESCE($4, description)
             WHERE id = $1 AND product_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(product_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a review within a product. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, product_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1 AND product_id = $2")
            .bind(id)
            .bind(product_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
