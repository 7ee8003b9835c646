//! Repository for the `cart_items` table.
//!
//! All reads and writes are scoped to a cart.

use sqlx::PgPool;
use storefront_core::types::{CartId, DbId};

use crate::models::cart::{AddCartItem, CartItem, CartItemWithProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, cart_id, product_id, quantity, created_at, updated_at";

/// Cart items joined with their products, as read by cart views.
const ITEM_WITH_PRODUCT_COLUMNS: &str = "ci.id, ci.quantity, p.id AS product_id, \
                                         p.title AS product_title, \
                                         p.unit_price AS product_unit_price";

/// Provides cart-scoped operations for cart items.
pub struct CartItemRepo;

impl CartItemRepo {
    /// Add a product to a cart. If the cart already holds the product, the
    /// quantities are summed on the existing row.
    pub async fn add(
        pool: &PgPool,
        cart_id: CartId,
        input: &AddCartItem,
    ) -> Result<CartItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO cart_items (cart_id, product_id, quantity)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_cart_items_cart_product
             DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(cart_id)
            .bind(input.product_id)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// List a cart's lines with their products in one joined query.
    pub async fn list_for_cart(
        pool: &PgPool,
        cart_id: CartId,
    ) -> Result<Vec<CartItemWithProduct>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_WITH_PRODUCT_COLUMNS}
             FROM cart_items ci
             JOIN products p ON p.id = ci.product_id
             WHERE ci.cart_id = $1
             ORDER BY ci.id"
        );
        sqlx::query_as::<_, CartItemWithProduct>(&query)
            .bind(cart_id)
            .fetch_all(pool)
            .await
    }

    /// Find one line of a cart with its product.
    pub async fn find_for_cart(
        pool: &PgPool,
        cart_id: CartId,
        id: DbId,
    ) -> Result<Option<CartItemWithProduct>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_WITH_PRODUCT_COLUMNS}
             FROM cart_items ci
             JOIN products p ON p.id = ci.product_id
             WHERE ci.id = $1 AND ci.cart_id = $2"
        );
        sqlx::query_as::<_, CartItemWithProduct>(&query)
            .bind(id)
            .bind(cart_id)
            .fetch_optional(pool)
            .await
    }

    /// Set a line's quantity.
    ///
    /// Returns `None` if the item does not exist in `cart_id`.
    pub async fn update_quantity(
        pool: &PgPool,
        cart_id: CartId,
        id: DbId,
        quantity: i16,
    ) -> Result<Option<CartItem>, sqlx::Error> {
        let query = format!(
            "UPDATE cart_items SET quantity = $3
             WHERE id = $1 AND cart_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(id)
            .bind(cart_id)
            .bind(quantity)
            .fetch_optional(pool)
            .await
    }

    /// Remove a line from a cart. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, cart_id: CartId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND cart_id = $2")
            .bind(id)
            .bind(cart_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
