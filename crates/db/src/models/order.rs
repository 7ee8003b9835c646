//! Order and order item models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::catalog::PaymentStatus;
use storefront_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `orders` table. `payment_status` holds the one-letter code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub placed_at: Timestamp,
    pub payment_status: String,
    pub customer_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `order_items` table. `unit_price` is the product price
/// captured when the order was placed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub product_id: DbId,
    pub quantity: i16,
    pub unit_price: Decimal,
}

/// An order together with its line items.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// One inline line item on a new order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderItem {
    pub product_id: DbId,
    #[validate(range(min = 1))]
    pub quantity: i16,
}

/// DTO for placing an order from the console.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrder {
    pub customer_id: DbId,
    /// Defaults to pending.
    pub payment_status: Option<PaymentStatus>,
    #[validate(nested)]
    pub items: Vec<CreateOrderItem>,
}
