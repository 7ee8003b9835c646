//! Catalog vocabulary: slugs, inventory status, customer tiers, payment states.

use serde::{Deserialize, Serialize};

/// Products with fewer units than this are reported as low on inventory.
pub const LOW_INVENTORY_THRESHOLD: i32 = 10;

/// Reason given when deleting a product that appears on an order.
pub const PRODUCT_DELETE_BLOCKED: &str =
    "Product can not be deleted because it is associated with an order item.";

/// Reason given when deleting a collection that still holds products.
pub const COLLECTION_DELETE_BLOCKED: &str =
    "Collection can not be deleted because it includes one or more products";

/// Reason given when deleting a subcollection that still holds products.
pub const SUBCOLLECTION_DELETE_BLOCKED: &str =
    "SubCollection can not be deleted because it includes one or more products";

/// Rejection for a cart line pointing at a product that does not exist.
pub const UNKNOWN_PRODUCT: &str = "No product with the given ID was found.";

/// Generate a URL slug from a human-readable title.
///
/// Lowercases ASCII letters, keeps digits, collapses every other run of
/// characters into a single `-`, and trims leading/trailing dashes.
///
/// # Examples
///
/// ```
/// use storefront_core::catalog::slugify;
/// assert_eq!(slugify("Summer Shoes"), "summer-shoes");
/// assert_eq!(slugify("  Tea & Coffee!! "), "tea-coffee");
/// assert_eq!(slugify("***"), "");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '_' || c == '-' || c.is_whitespace() || c.is_ascii_punctuation() {
            pending_dash = true;
        }
    }

    slug
}

/// Return `explicit` when it holds a non-blank slug, otherwise derive one
/// from `title`.
pub fn slug_or_default(explicit: Option<&str>, title: &str) -> String {
    match explicit.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => slugify(title),
    }
}

/// Inventory column shown in the console's product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InventoryStatus {
    Low,
    #[serde(rename = "OK")]
    Ok,
}

impl InventoryStatus {
    pub fn from_inventory(inventory: i32) -> Self {
        if inventory < LOW_INVENTORY_THRESHOLD {
            Self::Low
        } else {
            Self::Ok
        }
    }
}

/// Customer membership tier, stored as a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Membership {
    #[serde(rename = "B")]
    Bronze,
    #[serde(rename = "S")]
    Silver,
    #[serde(rename = "G")]
    Gold,
}

impl Membership {
    pub fn code(self) -> &'static str {
        match self {
            Self::Bronze => "B",
            Self::Silver => "S",
            Self::Gold => "G",
        }
    }
}

/// Order payment status, stored as a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "P")]
    Pending,
    #[serde(rename = "C")]
    Complete,
    #[serde(rename = "F")]
    Failed,
}

impl PaymentStatus {
    pub fn code(self) -> &'static str {
        match self {
            Self::Pending => "P",
            Self::Complete => "C",
            Self::Failed => "F",
        }
    }
}
