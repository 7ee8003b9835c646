//! Role lookup table model.

use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::Timestamp;

/// A row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: i16,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
