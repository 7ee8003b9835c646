//! Product list filter.
//!
//! Only an allow-listed set of field/operator pairs is recognised: `id`
//! (exact) and `unit_price` (greater-than, less-than). Any other query
//! parameter is ignored rather than rejected; a malformed value for a
//! recognised parameter fails deserialization.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::DbId;

/// Filter parameters accepted by the product list endpoint.
///
/// Both the double-underscore lookup style (`unit_price__gt`) and the
/// single-underscore style (`unit_price_gt`) are accepted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductFilter {
    pub id: Option<DbId>,
    #[serde(rename = "unit_price__gt", alias = "unit_price_gt")]
    pub unit_price_gt: Option<Decimal>,
    #[serde(rename = "unit_price__lt", alias = "unit_price_lt")]
    pub unit_price_lt: Option<Decimal>,
}

/// A single store predicate produced by [`ProductFilter::predicates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductPredicate {
    IdEq(DbId),
    UnitPriceGt(Decimal),
    UnitPriceLt(Decimal),
}

impl ProductPredicate {
    /// SQL condition with a single `?` placeholder for the bound value.
    pub fn condition(&self) -> &'static str {
        match self {
            Self::IdEq(_) => "p.id = ",
            Self::UnitPriceGt(_) => "p.unit_price > ",
            Self::UnitPriceLt(_) => "p.unit_price < ",
        }
    }
}

impl ProductFilter {
    /// Predicates to AND together, in a stable order.
    pub fn predicates(&self) -> Vec<ProductPredicate> {
        let mut out = Vec::with_capacity(3);
        if let Some(id) = self.id {
            out.push(ProductPredicate::IdEq(id));
        }
        if let Some(gt) = self.unit_price_gt {
            out.push(ProductPredicate::UnitPriceGt(gt));
        }
        if let Some(lt) = self.unit_price_lt {
            out.push(ProductPredicate::UnitPriceLt(lt));
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.unit_price_gt.is_none() && self.unit_price_lt.is_none()
    }
}
