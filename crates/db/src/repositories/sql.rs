//! Shared fragments for dynamically built list queries.

use sqlx::{Postgres, QueryBuilder};
use storefront_core::search::SearchField;

/// Tracks whether a `WHERE` keyword has been emitted yet.
pub(crate) struct Conditions {
    any: bool,
}

impl Conditions {
    pub(crate) fn new() -> Self {
        Self { any: false }
    }

    /// Emit `WHERE` before the first condition and `AND` before the rest.
    pub(crate) fn next(&mut self, qb: &mut QueryBuilder<'_, Postgres>) {
        if self.any {
            qb.push(" AND ");
        } else {
            qb.push(" WHERE ");
            self.any = true;
        }
    }
}

/// Append one condition per search term; each term must match at least one
/// of `fields`.
pub(crate) fn push_search(
    qb: &mut QueryBuilder<'_, Postgres>,
    conditions: &mut Conditions,
    terms: &[&str],
    fields: &[SearchField],
) {
    if fields.is_empty() {
        return;
    }
    for term in terms {
        conditions.next(qb);
        qb.push("(");
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                qb.push(" OR ");
            }
            qb.push(field.column)
                .push(" ILIKE ")
                .push_bind(field.pattern(term));
        }
        qb.push(")");
    }
}

/// Append `LIMIT/OFFSET`.
pub(crate) fn push_page(qb: &mut QueryBuilder<'_, Postgres>, limit: i64, offset: i64) {
    qb.push(" LIMIT ").push_bind(limit);
    qb.push(" OFFSET ").push_bind(offset);
}
