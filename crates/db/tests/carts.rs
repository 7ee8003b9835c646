//! Integration tests for carts and cart items.

use rust_decimal::Decimal;
use sqlx::PgPool;
use storefront_db::models::cart::{AddCartItem, CartDetail};
use storefront_db::models::collection::CreateCollection;
use storefront_db::models::product::CreateProduct;
use storefront_db::models::subcollection::CreateSubCollection;
use storefront_db::repositories::{
    CartItemRepo, CartRepo, CollectionRepo, ProductRepo, SubCollectionRepo,
};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_product(pool: &PgPool, title: &str, price: Decimal) -> i64 {
    let collection = CollectionRepo::create(
        pool,
        &CreateCollection {
            title: format!("{title} collection"),
            slug: None,
            featured_product_id: None,
        },
    )
    .await
    .unwrap();
    let sub = SubCollectionRepo::create(
        pool,
        &CreateSubCollection {
            title: format!("{title} sub"),
            slug: None,
            collection_id: collection.id,
            featured_product_id: None,
        },
    )
    .await
    .unwrap();
    ProductRepo::create(
        pool,
        &CreateProduct {
            title: title.to_string(),
            slug: None,
            description: None,
            unit_price: price,
            inventory: 5,
            subcollection_id: sub.id,
        },
    )
    .await
    .unwrap()
    .id
}

fn add(product_id: i64, quantity: i16) -> AddCartItem {
    AddCartItem {
        product_id,
        quantity,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_adding_same_product_merges_quantities(pool: PgPool) {
    let product_id = seed_product(&pool, "Boot", Decimal::from(10)).await;
    let cart = CartRepo::create(&pool).await.unwrap();

    let first = CartItemRepo::add(&pool, cart.id, &add(product_id, 2))
        .await
        .unwrap();
    let second = CartItemRepo::add(&pool, cart.id, &add(product_id, 3))
        .await
        .unwrap();

    assert_eq!(first.id, second.id, "merge keeps the existing row");
    assert_eq!(second.quantity, 5);
    let lines = CartItemRepo::list_for_cart(&pool, cart.id).await.unwrap();
    assert_eq!(lines.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cart_detail_totals(pool: PgPool) {
    let boot = seed_product(&pool, "Boot", Decimal::new(2500, 2)).await;
    let sock = seed_product(&pool, "Sock", Decimal::new(350, 2)).await;
    let cart = CartRepo::create(&pool).await.unwrap();
    CartItemRepo::add(&pool, cart.id, &add(boot, 2)).await.unwrap();
    CartItemRepo::add(&pool, cart.id, &add(sock, 4)).await.unwrap();

    let rows = CartItemRepo::list_for_cart(&pool, cart.id).await.unwrap();
    let detail = CartDetail::new(cart, rows);
    assert_eq!(detail.items.len(), 2);
    assert_eq!(detail.items[0].product.title, "Boot");
    assert_eq!(detail.items[0].total_price, Decimal::new(5000, 2));
    assert_eq!(detail.total_price, Decimal::new(6400, 2));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_items_are_scoped_to_their_cart(pool: PgPool) {
    let product_id = seed_product(&pool, "Boot", Decimal::from(10)).await;
    let mine = CartRepo::create(&pool).await.unwrap();
    let theirs = CartRepo::create(&pool).await.unwrap();
    let item = CartItemRepo::add(&pool, mine.id, &add(product_id, 1))
        .await
        .unwrap();

    assert!(CartItemRepo::find_for_cart(&pool, theirs.id, item.id)
        .await
        .unwrap()
        .is_none());
    assert!(CartItemRepo::update_quantity(&pool, theirs.id, item.id, 9)
        .await
        .unwrap()
        .is_none());
    assert!(!CartItemRepo::delete(&pool, theirs.id, item.id).await.unwrap());

    let updated = CartItemRepo::update_quantity(&pool, mine.id, item.id, 4)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.quantity, 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_product_violates_foreign_key(pool: PgPool) {
    let cart = CartRepo::create(&pool).await.unwrap();
    let err = CartItemRepo::add(&pool, cart.id, &add(999_999, 1))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_cart_removes_items(pool: PgPool) {
    let product_id = seed_product(&pool, "Boot", Decimal::from(10)).await;
    let cart = CartRepo::create(&pool).await.unwrap();
    CartItemRepo::add(&pool, cart.id, &add(product_id, 1))
        .await
        .unwrap();

    assert!(CartRepo::delete(&pool, cart.id).await.unwrap());
    assert!(!CartRepo::exists(&pool, cart.id).await.unwrap());
    assert!(CartItemRepo::list_for_cart(&pool, cart.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_cart_is_absent(pool: PgPool) {
    assert!(CartRepo::find_by_id(&pool, Uuid::new_v4())
        .await
        .unwrap()
        .is_none());
    assert!(!CartRepo::delete(&pool, Uuid::new_v4()).await.unwrap());
}
