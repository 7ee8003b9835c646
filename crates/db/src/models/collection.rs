//! Collection entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `collections` table, annotated with the number of
/// distinct products across all of its subcollections.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collection {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub featured_product_id: Option<DbId>,
    pub products_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating (or fully replacing) a collection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCollection {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Generated from `title` when omitted or blank.
    pub slug: Option<String>,
    pub featured_product_id: Option<DbId>,
}

/// DTO for partially updating a collection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCollection {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub slug: Option<String>,
    pub featured_product_id: Option<DbId>,
}
