//! Row models for the operator console's change lists.
//!
//! Each change list reads a denormalized row (`*Row`, `FromRow`) and
//! renders it into the JSON shape the console shows (`*Entry`), adding
//! computed columns and links to related lists.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::catalog::InventoryStatus;
use storefront_core::console::{changelist_link, DateWindow};
use storefront_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct ProductChangeRow {
    pub id: DbId,
    pub title: String,
    pub unit_price: Decimal,
    pub inventory: i32,
    pub last_update: Timestamp,
    pub subcollection_id: DbId,
    pub subcollection_title: String,
    pub collection_id: DbId,
    pub collection_title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductChangeEntry {
    pub id: DbId,
    pub title: String,
    pub unit_price: Decimal,
    pub inventory: i32,
    pub inventory_status: InventoryStatus,
    pub last_update: Timestamp,
    pub subcollection_id: DbId,
    pub subcollection_title: String,
    pub collection_id: DbId,
    pub collection_title: String,
}

impl From<ProductChangeRow> for ProductChangeEntry {
    fn from(row: ProductChangeRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            unit_price: row.unit_price,
            inventory: row.inventory,
            inventory_status: InventoryStatus::from_inventory(row.inventory),
            last_update: row.last_update,
            subcollection_id: row.subcollection_id,
            subcollection_title: row.subcollection_title,
            collection_id: row.collection_id,
            collection_title: row.collection_title,
        }
    }
}

/// Side filters on the console product list.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProductChangeFilter {
    pub subcollection_id: Option<DbId>,
    pub collection_id: Option<DbId>,
    pub last_update: Option<DateWindow>,
}

/// Body of the clear-inventory bulk action.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSelection {
    pub ids: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct CollectionChangeRow {
    pub id: DbId,
    pub title: String,
    pub subcollections_count: i64,
    pub products_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionChangeEntry {
    pub id: DbId,
    pub title: String,
    pub subcollections_count: i64,
    pub subcollections_link: String,
    pub products_count: i64,
    pub products_link: String,
}

impl From<CollectionChangeRow> for CollectionChangeEntry {
    fn from(row: CollectionChangeRow) -> Self {
        Self {
            subcollections_link: changelist_link("subcollections", "collection_id", row.id),
            products_link: changelist_link("products", "collection_id", row.id),
            id: row.id,
            title: row.title,
            subcollections_count: row.subcollections_count,
            products_count: row.products_count,
        }
    }
}

// ---------------------------------------------------------------------------
// Subcollections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct SubCollectionChangeRow {
    pub id: DbId,
    pub title: String,
    pub collection_id: DbId,
    pub collection_title: String,
    pub products_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubCollectionChangeEntry {
    pub id: DbId,
    pub title: String,
    pub collection_id: DbId,
    pub collection_title: String,
    pub products_count: i64,
    pub products_link: String,
}

impl From<SubCollectionChangeRow> for SubCollectionChangeEntry {
    fn from(row: SubCollectionChangeRow) -> Self {
        Self {
            products_link: changelist_link("products", "subcollection_id", row.id),
            id: row.id,
            title: row.title,
            collection_id: row.collection_id,
            collection_title: row.collection_title,
            products_count: row.products_count,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SubCollectionChangeFilter {
    pub collection_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Customers and orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerChangeEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub membership: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderChangeEntry {
    pub id: DbId,
    pub placed_at: Timestamp,
    pub payment_status: String,
    pub customer_id: DbId,
    /// Display name of the customer: "first last", or the username when
    /// both names are blank.
    pub customer: String,
}

/// Result of the clear-inventory bulk action.
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutcome {
    pub updated: u64,
    pub message: storefront_core::console::ConsoleMessage,
}
