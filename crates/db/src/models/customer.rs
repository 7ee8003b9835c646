//! Customer entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::catalog::Membership;
use storefront_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `customers` table. `membership` holds the one-letter code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub user_id: DbId,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub membership: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a customer profile for an existing user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomer {
    pub user_id: DbId,
    #[validate(length(max = 255))]
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// Defaults to bronze.
    pub membership: Option<Membership>,
}

/// DTO for updating a customer. The console edits `membership` inline.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCustomer {
    #[validate(length(max = 255))]
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub membership: Option<Membership>,
}
