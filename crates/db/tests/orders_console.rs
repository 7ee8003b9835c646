//! Integration tests for customers, orders and the console change lists.

use rust_decimal::Decimal;
use sqlx::PgPool;
use storefront_core::catalog::{InventoryStatus, Membership};
use storefront_core::pagination::PageRequest;
use storefront_core::roles::ROLE_CUSTOMER;
use storefront_db::models::collection::CreateCollection;
use storefront_db::models::console::{ProductChangeFilter, SubCollectionChangeFilter};
use storefront_db::models::customer::{CreateCustomer, UpdateCustomer};
use storefront_db::models::order::{CreateOrder, CreateOrderItem};
use storefront_db::models::product::{CreateProduct, UpdateProduct};
use storefront_db::models::subcollection::CreateSubCollection;
use storefront_db::models::user::CreateUser;
use storefront_db::repositories::{
    ChangeListQuery, CollectionRepo, ConsoleRepo, CustomerRepo, OrderRepo, ProductRepo,
    RoleRepo, SubCollectionRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Catalog {
    collection_id: i64,
    subcollection_id: i64,
    products: Vec<i64>,
}

async fn seed_catalog(pool: &PgPool, inventories: &[i32]) -> Catalog {
    let collection = CollectionRepo::create(
        pool,
        &CreateCollection {
            title: "Shoes".into(),
            slug: None,
            featured_product_id: None,
        },
    )
    .await
    .unwrap();
    let sub = SubCollectionRepo::create(
        pool,
        &CreateSubCollection {
            title: "Boots".into(),
            slug: None,
            collection_id: collection.id,
            featured_product_id: None,
        },
    )
    .await
    .unwrap();

    let mut products = Vec::new();
    for (i, inventory) in inventories.iter().enumerate() {
        let product = ProductRepo::create(
            pool,
            &CreateProduct {
                title: format!("Boot {i}"),
                slug: None,
                description: None,
                unit_price: Decimal::from(10 + i as i64),
                inventory: *inventory,
                subcollection_id: sub.id,
            },
        )
        .await
        .unwrap();
        products.push(product.id);
    }

    Catalog {
        collection_id: collection.id,
        subcollection_id: sub.id,
        products,
    }
}

async fn seed_customer(pool: &PgPool, username: &str, first: &str, last: &str) -> i64 {
    let role = RoleRepo::find_by_name(pool, ROLE_CUSTOMER)
        .await
        .unwrap()
        .unwrap();
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "not-a-real-hash".into(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            role_id: role.id,
        },
    )
    .await
    .unwrap();
    CustomerRepo::create(
        pool,
        &CreateCustomer {
            user_id: user.id,
            phone: None,
            birth_date: None,
            membership: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn first_page() -> ChangeListQuery<'static> {
    ChangeListQuery {
        search: None,
        ordering: None,
        page: PageRequest::new(None, 10).unwrap(),
    }
}

// ---------------------------------------------------------------------------
// Customers and orders
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_customer_defaults_to_bronze_and_membership_is_editable(pool: PgPool) {
    let id = seed_customer(&pool, "ana", "Ana", "Silva").await;
    let customer = CustomerRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(customer.membership, "B");

    let updated = CustomerRepo::update(
        &pool,
        id,
        &UpdateCustomer {
            membership: Some(Membership::Gold),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.membership, "G");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_order_snapshots_unit_prices(pool: PgPool) {
    let catalog = seed_catalog(&pool, &[20, 20]).await;
    let customer_id = seed_customer(&pool, "ana", "Ana", "Silva").await;

    let order = OrderRepo::create(
        &pool,
        &CreateOrder {
            customer_id,
            payment_status: None,
            items: vec![
                CreateOrderItem {
                    product_id: catalog.products[0],
                    quantity: 2,
                },
                CreateOrderItem {
                    product_id: catalog.products[1],
                    quantity: 1,
                },
            ],
        },
    )
    .await
    .unwrap();
    assert_eq!(order.order.payment_status, "P");
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].unit_price, Decimal::from(10));

    ProductRepo::update(
        &pool,
        catalog.products[0],
        &UpdateProduct {
            unit_price: Some(Decimal::from(99)),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let reloaded = OrderRepo::find_by_id(&pool, order.order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.items[0].unit_price, Decimal::from(10));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_order_with_unknown_product_rolls_back(pool: PgPool) {
    let catalog = seed_catalog(&pool, &[20]).await;
    let customer_id = seed_customer(&pool, "ana", "Ana", "Silva").await;

    let result = OrderRepo::create(
        &pool,
        &CreateOrder {
            customer_id,
            payment_status: None,
            items: vec![
                CreateOrderItem {
                    product_id: catalog.products[0],
                    quantity: 1,
                },
                CreateOrderItem {
                    product_id: 999_999,
                    quantity: 1,
                },
            ],
        },
    )
    .await;
    assert!(result.is_err());

    let orders: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orders.0, 0, "failed order leaves nothing behind");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ordered_product_cannot_be_deleted(pool: PgPool) {
    let catalog = seed_catalog(&pool, &[20]).await;
    let customer_id = seed_customer(&pool, "ana", "Ana", "Silva").await;
    OrderRepo::create(
        &pool,
        &CreateOrder {
            customer_id,
            payment_status: None,
            items: vec![CreateOrderItem {
                product_id: catalog.products[0],
                quantity: 1,
            }],
        },
    )
    .await
    .unwrap();

    assert_eq!(
        ProductRepo::count_order_items(&pool, catalog.products[0])
            .await
            .unwrap(),
        1
    );
    assert!(ProductRepo::delete(&pool, catalog.products[0]).await.is_err());
}

// ---------------------------------------------------------------------------
// Console change lists
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_change_list_flags_low_inventory(pool: PgPool) {
    let catalog = seed_catalog(&pool, &[3, 50]).await;

    let (rows, count) = ConsoleRepo::products(
        &pool,
        &ProductChangeFilter::default(),
        first_page(),
        chrono::Utc::now(),
    )
    .await
    .unwrap();
    assert_eq!(count, 2);
    assert_eq!(rows[0].inventory_status, InventoryStatus::Low);
    assert_eq!(rows[1].inventory_status, InventoryStatus::Ok);
    assert_eq!(rows[0].collection_title, "Shoes");
    assert_eq!(rows[0].subcollection_title, "Boots");

    let filter = ProductChangeFilter {
        collection_id: Some(catalog.collection_id),
        ..Default::default()
    };
    let (_, count) = ConsoleRepo::products(&pool, &filter, first_page(), chrono::Utc::now())
        .await
        .unwrap();
    assert_eq!(count, 2);

    let filter = ProductChangeFilter {
        subcollection_id: Some(catalog.subcollection_id + 1),
        ..Default::default()
    };
    let (_, count) = ConsoleRepo::products(&pool, &filter, first_page(), chrono::Utc::now())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_clear_inventory_touches_only_selected_products(pool: PgPool) {
    let catalog = seed_catalog(&pool, &[5, 6, 7]).await;
    let selected = &catalog.products[..2];

    let updated = ConsoleRepo::clear_inventory(&pool, selected).await.unwrap();
    assert_eq!(updated, 2);

    for id in selected {
        let product = ProductRepo::find_by_id(&pool, *id).await.unwrap().unwrap();
        assert_eq!(product.inventory, 0);
    }
    let untouched = ProductRepo::find_by_id(&pool, catalog.products[2])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.inventory, 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_collection_and_subcollection_change_lists(pool: PgPool) {
    let catalog = seed_catalog(&pool, &[1, 2, 3]).await;

    let (rows, count) = ConsoleRepo::collections(&pool, first_page()).await.unwrap();
    assert_eq!(count, 1);
    assert_eq!(rows[0].subcollections_count, 1);
    assert_eq!(rows[0].products_count, 3);
    assert_eq!(
        rows[0].products_link,
        format!("/api/v1/admin/products?collection_id={}", catalog.collection_id)
    );

    let filter = SubCollectionChangeFilter {
        collection_id: Some(catalog.collection_id),
    };
    let query = ChangeListQuery {
        search: Some("shoes"),
        ..first_page()
    };
    let (rows, count) = ConsoleRepo::subcollections(&pool, &filter, query)
        .await
        .unwrap();
    assert_eq!(count, 1, "search matches the collection title");
    assert_eq!(rows[0].collection_title, "Shoes");
    assert_eq!(rows[0].products_count, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_customer_change_list_orders_and_prefix_search(pool: PgPool) {
    seed_customer(&pool, "zed", "Zoe", "Adams").await;
    seed_customer(&pool, "amy", "Amy", "Zhang").await;
    seed_customer(&pool, "amb", "Amy", "Brown").await;

    let (rows, count) = ConsoleRepo::customers(&pool, first_page()).await.unwrap();
    assert_eq!(count, 3);
    let names: Vec<_> = rows
        .iter()
        .map(|r| format!("{} {}", r.first_name, r.last_name))
        .collect();
    assert_eq!(names, vec!["Amy Brown", "Amy Zhang", "Zoe Adams"]);

    let query = ChangeListQuery {
        search: Some("zh"),
        ..first_page()
    };
    let (rows, _) = ConsoleRepo::customers(&pool, query).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "amy");

    let query = ChangeListQuery {
        search: Some("hang"),
        ..first_page()
    };
    let (_, count) = ConsoleRepo::customers(&pool, query).await.unwrap();
    assert_eq!(count, 0, "names match by prefix only");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_order_change_list_shows_customer_name(pool: PgPool) {
    let catalog = seed_catalog(&pool, &[20]).await;
    let customer_id = seed_customer(&pool, "ana", "Ana", "Silva").await;
    OrderRepo::create(
        &pool,
        &CreateOrder {
            customer_id,
            payment_status: None,
            items: vec![CreateOrderItem {
                product_id: catalog.products[0],
                quantity: 1,
            }],
        },
    )
    .await
    .unwrap();

    let (rows, count) = ConsoleRepo::orders(&pool, first_page()).await.unwrap();
    assert_eq!(count, 1);
    assert_eq!(rows[0].customer, "Ana Silva");
}
