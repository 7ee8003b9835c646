//! Cart and cart item models.
//!
//! Carts are anonymous and addressed by a random UUID. Items are unique per
//! `(cart, product)`; adding a product that is already in the cart merges
//! into the existing line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{CartId, DbId, Timestamp};
use validator::Validate;

/// A row from the `carts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cart {
    pub id: CartId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `cart_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CartItem {
    pub id: DbId,
    pub cart_id: CartId,
    pub product_id: DbId,
    pub quantity: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A cart item joined with the product fields shown in cart views.
#[derive(Debug, Clone, FromRow)]
pub struct CartItemWithProduct {
    pub id: DbId,
    pub quantity: i16,
    pub product_id: DbId,
    pub product_title: String,
    pub product_unit_price: Decimal,
}

/// Product summary nested in a cart line.
#[derive(Debug, Clone, Serialize)]
pub struct CartProduct {
    pub id: DbId,
    pub title: String,
    pub unit_price: Decimal,
}

/// A cart line with its computed total.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub id: DbId,
    pub product: CartProduct,
    pub quantity: i16,
    pub total_price: Decimal,
}

impl From<CartItemWithProduct> for CartLine {
    fn from(row: CartItemWithProduct) -> Self {
        let total_price = row.product_unit_price * Decimal::from(row.quantity);
        Self {
            id: row.id,
            product: CartProduct {
                id: row.product_id,
                title: row.product_title,
                unit_price: row.product_unit_price,
            },
            quantity: row.quantity,
            total_price,
        }
    }
}

/// A cart with all of its lines and the grand total.
#[derive(Debug, Clone, Serialize)]
pub struct CartDetail {
    pub id: CartId,
    pub created_at: Timestamp,
    pub items: Vec<CartLine>,
    pub total_price: Decimal,
}

impl CartDetail {
    pub fn new(cart: Cart, rows: Vec<CartItemWithProduct>) -> Self {
        let items: Vec<CartLine> = rows.into_iter().map(CartLine::from).collect();
        let total_price = items.iter().map(|line| line.total_price).sum();
        Self {
            id: cart.id,
            created_at: cart.created_at,
            items,
            total_price,
        }
    }
}

/// DTO for adding a product to a cart.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCartItem {
    pub product_id: DbId,
    #[validate(range(min = 1))]
    pub quantity: i16,
}

/// Response body after adding to a cart.
#[derive(Debug, Clone, Serialize)]
pub struct AddedCartItem {
    pub id: DbId,
    pub product_id: DbId,
    pub quantity: i16,
}

impl From<CartItem> for AddedCartItem {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

/// DTO for changing a cart line's quantity. Also the response body.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct UpdateCartItem {
    #[validate(range(min = 1))]
    pub quantity: i16,
}
