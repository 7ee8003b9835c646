//! Change-list queries and bulk actions for the operator console.
//!
//! Each list joins the rows it needs for its computed columns, applies the
//! list's side filters and `?search=`, sorts by an allow-listed column and
//! returns one page plus the total number of matching rows.

use sqlx::{PgPool, Postgres, QueryBuilder};
use storefront_core::ordering::{
    order_by_clause, parse_ordering, Direction, OrderingField, SortKey,
};
use storefront_core::pagination::PageRequest;
use storefront_core::search::{search_terms, SearchField};
use storefront_core::types::{DbId, Timestamp};

use super::sql::{push_page, push_search, Conditions};
use crate::models::console::{
    CollectionChangeEntry, CollectionChangeRow, CustomerChangeEntry, OrderChangeEntry,
    ProductChangeEntry, ProductChangeFilter, ProductChangeRow, SubCollectionChangeEntry,
    SubCollectionChangeFilter, SubCollectionChangeRow,
};

/// `?search=`, `?ordering=` and the page of a change-list request.
#[derive(Debug, Clone, Copy)]
pub struct ChangeListQuery<'a> {
    pub search: Option<&'a str>,
    pub ordering: Option<&'a str>,
    pub page: PageRequest,
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

const PRODUCT_FROM: &str = " FROM products p \
                            JOIN subcollections s ON s.id = p.subcollection_id \
                            JOIN collections c ON c.id = s.collection_id";

const PRODUCT_COLUMNS: &str = "p.id, p.title, p.unit_price, p.inventory, p.last_update, \
                               s.id AS subcollection_id, s.title AS subcollection_title, \
                               c.id AS collection_id, c.title AS collection_title";

const PRODUCT_SEARCH: &[SearchField] = &[SearchField::contains("p.title")];

/// The inventory status column sorts by the inventory it is derived from.
const PRODUCT_ORDERING: &[OrderingField] = &[
    OrderingField::new("title", "p.title"),
    OrderingField::new("unit_price", "p.unit_price"),
    OrderingField::new("inventory", "p.inventory"),
    OrderingField::new("inventory_status", "p.inventory"),
    OrderingField::new("last_update", "p.last_update"),
];

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

const COLLECTION_COLUMNS: &str = "c.id, c.title, \
     (SELECT COUNT(*) FROM subcollections s WHERE s.collection_id = c.id) AS subcollections_count, \
     (SELECT COUNT(DISTINCT p.id) FROM subcollections s \
      JOIN products p ON p.subcollection_id = s.id \
      WHERE s.collection_id = c.id) AS products_count";

const COLLECTION_SEARCH: &[SearchField] = &[SearchField::contains("c.title")];

const COLLECTION_ORDERING: &[OrderingField] = &[
    OrderingField::new("title", "c.title"),
    OrderingField::new("subcollections_count", "subcollections_count"),
    OrderingField::new("products_count", "products_count"),
];

// ---------------------------------------------------------------------------
// Subcollections
// ---------------------------------------------------------------------------

const SUBCOLLECTION_FROM: &str =
    " FROM subcollections s JOIN collections c ON c.id = s.collection_id";

const SUBCOLLECTION_COLUMNS: &str = "s.id, s.title, c.id AS collection_id, \
     c.title AS collection_title, \
     (SELECT COUNT(*) FROM products p WHERE p.subcollection_id = s.id) AS products_count";

const SUBCOLLECTION_SEARCH: &[SearchField] = &[
    SearchField::contains("s.title"),
    SearchField::contains("c.title"),
];

const SUBCOLLECTION_ORDERING: &[OrderingField] = &[
    OrderingField::new("title", "s.title"),
    OrderingField::new("collection_title", "c.title"),
    OrderingField::new("products_count", "products_count"),
];

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

const CUSTOMER_FROM: &str = " FROM customers cu JOIN users u ON u.id = cu.user_id";

const CUSTOMER_COLUMNS: &str =
    "cu.id, cu.user_id, u.username, u.first_name, u.last_name, cu.membership";

const CUSTOMER_SEARCH: &[SearchField] = &[
    SearchField::starts_with("u.first_name"),
    SearchField::starts_with("u.last_name"),
];

const CUSTOMER_ORDERING: &[OrderingField] = &[
    OrderingField::new("first_name", "u.first_name"),
    OrderingField::new("last_name", "u.last_name"),
    OrderingField::new("membership", "cu.membership"),
];

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

const ORDER_FROM: &str = " FROM orders o \
                          JOIN customers cu ON cu.id = o.customer_id \
                          JOIN users u ON u.id = cu.user_id";

const ORDER_COLUMNS: &str = "o.id, o.placed_at, o.payment_status, o.customer_id, \
     COALESCE(NULLIF(TRIM(u.first_name || ' ' || u.last_name), ''), u.username) AS customer";

const ORDER_ORDERING: &[OrderingField] = &[
    OrderingField::new("id", "o.id"),
    OrderingField::new("placed_at", "o.placed_at"),
];

/// Provides the console's change lists and bulk actions.
pub struct ConsoleRepo;

impl ConsoleRepo {
    /// Product change list with subcollection/collection titles.
    ///
    /// `now` anchors the `last_update` date windows.
    pub async fn products(
        pool: &PgPool,
        filter: &ProductChangeFilter,
        query: ChangeListQuery<'_>,
        now: Timestamp,
    ) -> Result<(Vec<ProductChangeEntry>, i64), sqlx::Error> {
        let terms = query.search.map(search_terms).unwrap_or_default();

        let mut count_qb = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*){PRODUCT_FROM}"));
        push_product_where(&mut count_qb, filter, &terms, now);
        let count = count_qb.build_query_scalar::<i64>().fetch_one(pool).await?;

        let keys = parse_ordering(query.ordering, PRODUCT_ORDERING);
        let mut qb =
            QueryBuilder::<Postgres>::new(format!("SELECT {PRODUCT_COLUMNS}{PRODUCT_FROM}"));
        push_product_where(&mut qb, filter, &terms, now);
        qb.push(" ORDER BY ")
            .push(order_by_clause(&keys, SortKey::asc("p.title"), "p.id"));
        push_page(&mut qb, query.page.limit(), query.page.offset());
        let rows = qb
            .build_query_as::<ProductChangeRow>()
            .fetch_all(pool)
            .await?;

        Ok((rows.into_iter().map(Into::into).collect(), count))
    }

    /// Set `inventory = 0` on exactly the given products. Returns the number
    /// of rows changed.
    pub async fn clear_inventory(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE products SET inventory = 0 WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Collection change list with subcollection and product counts.
    pub async fn collections(
        pool: &PgPool,
        query: ChangeListQuery<'_>,
    ) -> Result<(Vec<CollectionChangeEntry>, i64), sqlx::Error> {
        let terms = query.search.map(search_terms).unwrap_or_default();

        let mut count_qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM collections c");
        push_search(&mut count_qb, &mut Conditions::new(), &terms, COLLECTION_SEARCH);
        let count = count_qb.build_query_scalar::<i64>().fetch_one(pool).await?;

        let keys = parse_ordering(query.ordering, COLLECTION_ORDERING);
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {COLLECTION_COLUMNS} FROM collections c"
        ));
        push_search(&mut qb, &mut Conditions::new(), &terms, COLLECTION_SEARCH);
        qb.push(" ORDER BY ")
            .push(order_by_clause(&keys, SortKey::asc("c.title"), "c.id"));
        push_page(&mut qb, query.page.limit(), query.page.offset());
        let rows = qb
            .build_query_as::<CollectionChangeRow>()
            .fetch_all(pool)
            .await?;

        Ok((rows.into_iter().map(Into::into).collect(), count))
    }

    /// Subcollection change list with collection title and product count.
    pub async fn subcollections(
        pool: &PgPool,
        filter: &SubCollectionChangeFilter,
        query: ChangeListQuery<'_>,
    ) -> Result<(Vec<SubCollectionChangeEntry>, i64), sqlx::Error> {
        let terms = query.search.map(search_terms).unwrap_or_default();

        let mut count_qb =
            QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*){SUBCOLLECTION_FROM}"));
        push_subcollection_where(&mut count_qb, filter, &terms);
        let count = count_qb.build_query_scalar::<i64>().fetch_one(pool).await?;

        let keys = parse_ordering(query.ordering, SUBCOLLECTION_ORDERING);
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {SUBCOLLECTION_COLUMNS}{SUBCOLLECTION_FROM}"
        ));
        push_subcollection_where(&mut qb, filter, &terms);
        qb.push(" ORDER BY ")
            .push(order_by_clause(&keys, SortKey::asc("s.title"), "s.id"));
        push_page(&mut qb, query.page.limit(), query.page.offset());
        let rows = qb
            .build_query_as::<SubCollectionChangeRow>()
            .fetch_all(pool)
            .await?;

        Ok((rows.into_iter().map(Into::into).collect(), count))
    }

    /// Customer change list, ordered by first then last name by default.
    pub async fn customers(
        pool: &PgPool,
        query: ChangeListQuery<'_>,
    ) -> Result<(Vec<CustomerChangeEntry>, i64), sqlx::Error> {
        let terms = query.search.map(search_terms).unwrap_or_default();

        let mut count_qb = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*){CUSTOMER_FROM}"));
        push_search(&mut count_qb, &mut Conditions::new(), &terms, CUSTOMER_SEARCH);
        let count = count_qb.build_query_scalar::<i64>().fetch_one(pool).await?;

        let mut keys = parse_ordering(query.ordering, CUSTOMER_ORDERING);
        if keys.is_empty() {
            keys = vec![SortKey::asc("u.first_name"), SortKey::asc("u.last_name")];
        }
        let mut qb =
            QueryBuilder::<Postgres>::new(format!("SELECT {CUSTOMER_COLUMNS}{CUSTOMER_FROM}"));
        push_search(&mut qb, &mut Conditions::new(), &terms, CUSTOMER_SEARCH);
        qb.push(" ORDER BY ")
            .push(order_by_clause(&keys, SortKey::asc("u.first_name"), "cu.id"));
        push_page(&mut qb, query.page.limit(), query.page.offset());
        let rows = qb
            .build_query_as::<CustomerChangeEntry>()
            .fetch_all(pool)
            .await?;

        Ok((rows, count))
    }

    /// Order change list with the customer's display name, newest first by
    /// default.
    pub async fn orders(
        pool: &PgPool,
        query: ChangeListQuery<'_>,
    ) -> Result<(Vec<OrderChangeEntry>, i64), sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(pool)
            .await?;

        let keys = parse_ordering(query.ordering, ORDER_ORDERING);
        let newest_first = SortKey {
            column: "o.placed_at",
            direction: Direction::Desc,
        };
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {ORDER_COLUMNS}{ORDER_FROM}"));
        qb.push(" ORDER BY ")
            .push(order_by_clause(&keys, newest_first, "o.id"));
        push_page(&mut qb, query.page.limit(), query.page.offset());
        let rows = qb
            .build_query_as::<OrderChangeEntry>()
            .fetch_all(pool)
            .await?;

        Ok((rows, count))
    }
}

fn push_product_where(
    qb: &mut QueryBuilder<'_, Postgres>,
    filter: &ProductChangeFilter,
    terms: &[&str],
    now: Timestamp,
) {
    let mut conditions = Conditions::new();
    if let Some(id) = filter.subcollection_id {
        conditions.next(qb);
        qb.push("s.id = ").push_bind(id);
    }
    if let Some(id) = filter.collection_id {
        conditions.next(qb);
        qb.push("c.id = ").push_bind(id);
    }
    if let Some(window) = filter.last_update {
        let (start, end) = window.bounds(now);
        conditions.next(qb);
        qb.push("p.last_update >= ").push_bind(start);
        qb.push(" AND p.last_update < ").push_bind(end);
    }
    push_search(qb, &mut conditions, terms, PRODUCT_SEARCH);
}

fn push_subcollection_where(
    qb: &mut QueryBuilder<'_, Postgres>,
    filter: &SubCollectionChangeFilter,
    terms: &[&str],
) {
    let mut conditions = Conditions::new();
    if let Some(id) = filter.collection_id {
        conditions.next(qb);
        qb.push("c.id = ").push_bind(id);
    }
    push_search(qb, &mut conditions, terms, SUBCOLLECTION_SEARCH);
}
