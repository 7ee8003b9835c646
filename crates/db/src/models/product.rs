//! Product entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationError};

/// Largest price a `NUMERIC(6, 2)` column can hold.
const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(999_999, 0, 0, false, 2);

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price: Decimal,
    pub inventory: i32,
    pub last_update: Timestamp,
    pub subcollection_id: DbId,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

/// DTO for creating (or fully replacing) a product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Generated from `title` when omitted or blank.
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_unit_price"))]
    pub unit_price: Decimal,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub inventory: i32,
    pub subcollection_id: DbId,
}

/// DTO for partially updating a product.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_unit_price"))]
    pub unit_price: Option<Decimal>,
    #[validate(range(min = 0))]
    pub inventory: Option<i32>,
    pub subcollection_id: Option<DbId>,
}

/// Prices are non-negative and fit `NUMERIC(6, 2)`.
pub fn validate_unit_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("unit_price_negative")
            .with_message("Ensure this value is greater than or equal to 0.".into()));
    }
    if *price > MAX_UNIT_PRICE || price.round_dp(2) != *price {
        return Err(ValidationError::new("unit_price_precision")
            .with_message("Ensure there are no more than 6 digits and 2 decimal places.".into()));
    }
    Ok(())
}
