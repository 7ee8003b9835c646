//! Repository for the `carts` table.

use sqlx::PgPool;
use storefront_core::types::CartId;
use uuid::Uuid;

use crate::models::cart::Cart;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_at, updated_at";

/// Provides operations for anonymous carts.
pub struct CartRepo;

impl CartRepo {
    /// Create an empty cart with a fresh random ID.
    pub async fn create(pool: &PgPool) -> Result<Cart, sqlx::Error> {
        let query = format!("INSERT INTO carts (id) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Cart>(&query)
            .bind(Uuid::new_v4())
            .fetch_one(pool)
            .await
    }

    /// Find a cart by ID.
    pub async fn find_by_id(pool: &PgPool, id: CartId) -> Result<Option<Cart>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM carts WHERE id = $1");
        sqlx::query_as::<_, Cart>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a cart with the given ID exists.
    pub async fn exists(pool: &PgPool, id: CartId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM carts WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a cart and its items. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: CartId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM carts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
