//! SubCollection entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `subcollections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubCollection {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub collection_id: DbId,
    pub featured_product_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a subcollection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubCollection {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub slug: Option<String>,
    pub collection_id: DbId,
    pub featured_product_id: Option<DbId>,
}

/// DTO for updating a subcollection. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSubCollection {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub slug: Option<String>,
    pub collection_id: Option<DbId>,
    pub featured_product_id: Option<DbId>,
}
