//! Repository for the `products` table.

use sqlx::{PgPool, Postgres, QueryBuilder};
use storefront_core::catalog::slug_or_default;
use storefront_core::filter::{ProductFilter, ProductPredicate};
use storefront_core::ordering::{order_by_clause, parse_ordering, OrderingField, SortKey};
use storefront_core::pagination::PageRequest;
use storefront_core::search::{search_terms, SearchField};
use storefront_core::types::DbId;

use super::sql::{push_page, push_search, Conditions};
use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "p.id, p.title, p.slug, p.description, p.unit_price, p.inventory, \
                       p.last_update, p.subcollection_id, p.created_at, p.updated_at";

/// Fields matched by `?search=`.
pub const SEARCH_FIELDS: &[SearchField] = &[
    SearchField::contains("p.title"),
    SearchField::contains("p.description"),
];

/// Fields accepted by `?ordering=`.
pub const ORDERING_FIELDS: &[OrderingField] = &[
    OrderingField::new("unit_price", "p.unit_price"),
    OrderingField::new("last_update", "p.last_update"),
];

/// Parameters of a product list query.
#[derive(Debug, Clone, Copy)]
pub struct ProductListQuery<'a> {
    pub filter: &'a ProductFilter,
    pub search: Option<&'a str>,
    pub ordering: Option<&'a str>,
    pub page: PageRequest,
}

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row. A missing slug is
    /// generated from the title.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products AS p
                (title, slug, description, unit_price, inventory, subcollection_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.title)
            .bind(slug_or_default(input.slug.as_deref(), &input.title))
            .bind(&input.description)
            .bind(input.unit_price)
            .bind(input.inventory)
            .bind(input.subcollection_id)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products p WHERE p.id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a product with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Filtered, searched, ordered page of products plus the total number
    /// of matching rows.
    pub async fn list(
        pool: &PgPool,
        params: ProductListQuery<'_>,
    ) -> Result<(Vec<Product>, i64), sqlx::Error> {
        let terms = params.search.map(search_terms).unwrap_or_default();

        let mut count_qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products p");
        push_conditions(&mut count_qb, params.filter, &terms);
        let count = count_qb.build_query_scalar::<i64>().fetch_one(pool).await?;

        let keys = parse_ordering(params.ordering, ORDERING_FIELDS);
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM products p"));
        push_conditions(&mut qb, params.filter, &terms);
        qb.push(" ORDER BY ")
            .push(order_by_clause(&keys, SortKey::asc("p.id"), "p.id"));
        push_page(&mut qb, params.page.limit(), params.page.offset());
        let rows = qb.build_query_as::<Product>().fetch_all(pool).await?;

        Ok((rows, count))
    }

    /// Replace every writable field of a product and bump `last_update`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products AS p SET
                title = $2,
                slug = $3,
                description = $4,
                unit_price = $5,
                inventory = $6,
                subcollection_id = $7,
                last_update = NOW()
             WHERE p.id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(slug_or_default(input.slug.as_deref(), &input.title))
            .bind(&input.description)
            .bind(input.unit_price)
            .bind(input.inventory)
            .bind(input.subcollection_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied;
    /// `last_update` is always bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products AS p SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                unit_price = COALESCE($5, unit_price),
                inventory = COALESCE($6, inventory),
                subcollection_id = COALESCE($7, subcollection_id),
                last_update = NOW()
             WHERE p.id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.slug.as_deref().filter(|s| !s.trim().is_empty()))
            .bind(&input.description)
            .bind(input.unit_price)
            .bind(input.inventory)
            .bind(input.subcollection_id)
            .fetch_optional(pool)
            .await
    }

    /// Number of order items that reference the product.
    pub async fn count_order_items(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM order_items WHERE product_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn push_conditions(qb: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter, terms: &[&str]) {
    let mut conditions = Conditions::new();
    for predicate in filter.predicates() {
        conditions.next(qb);
        qb.push(predicate.condition());
        match predicate {
            ProductPredicate::IdEq(id) => qb.push_bind(id),
            ProductPredicate::UnitPriceGt(price) | ProductPredicate::UnitPriceLt(price) => {
                qb.push_bind(price)
            }
        };
    }
    push_search(qb, &mut conditions, terms, SEARCH_FIELDS);
}
