//! Repository for the `orders` and `order_items` tables.

use sqlx::PgPool;
use storefront_core::catalog::PaymentStatus;
use storefront_core::types::DbId;

use crate::models::order::{CreateOrder, Order, OrderDetail, OrderItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, placed_at, payment_status, customer_id, created_at, updated_at";

const ITEM_COLUMNS: &str = "id, order_id, product_id, quantity, unit_price";

/// Provides operations for orders and their line items.
pub struct OrderRepo;

impl OrderRepo {
    /// Place an order with its line items in one transaction. Each item's
    /// unit price is copied from the product at insert time.
    ///
    /// An unknown product fails the `order_items.product_id` foreign key and
    /// rolls the whole order back.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<OrderDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let order_query = format!(
            "INSERT INTO orders (customer_id, payment_status)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&order_query)
            .bind(input.customer_id)
            .bind(input.payment_status.unwrap_or(PaymentStatus::Pending).code())
            .fetch_one(&mut *tx)
            .await?;

        let item_query = format!(
            "INSERT INTO order_items (order_id, product_id, quantity, unit_price)
             VALUES ($1, $2, $3, COALESCE((SELECT unit_price FROM products WHERE id = $2), 0))
             RETURNING {ITEM_COLUMNS}"
        );
        let mut items = Vec::with_capacity(input.items.len());
        for item in &input.items {
            let row = sqlx::query_as::<_, OrderItem>(&item_query)
                .bind(order.id)
                .bind(item.product_id)
                .bind(item.quantity)
                .fetch_one(&mut *tx)
                .await?;
            items.push(row);
        }

        tx.commit().await?;
        Ok(OrderDetail { order, items })
    }

    /// Find an order by ID together with its line items.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OrderDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        match order {
            Some(order) => {
                let items = Self::list_items(pool, order.id).await?;
                Ok(Some(OrderDetail { order, items }))
            }
            None => Ok(None),
        }
    }

    /// Line items of an order, in insertion order.
    pub async fn list_items(pool: &PgPool, order_id: DbId) -> Result<Vec<OrderItem>, sqlx::Error> {
        let query =
            format!("SELECT {ITEM_COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY id");
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an order and its items. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
