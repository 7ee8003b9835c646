//! HTTP-level integration tests for carts and their items.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    body_json, delete, get, patch_json, post_json, put_json, seed_catalog, seed_product, send,
};
use serde_json::json;
use sqlx::PgPool;

async fn new_cart(app: axum::Router) -> String {
    let response = send(app, Method::POST, "/api/v1/carts", None, None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_cart_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cart = new_cart(app.clone()).await;

    let json = body_json(get(app, &format!("/api/v1/carts/{cart}")).await).await;
    assert_eq!(json["id"], cart.as_str());
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(json["total_price"], "0");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cart_has_no_list_or_update(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cart = new_cart(app.clone()).await;

    let list = get(app.clone(), "/api/v1/carts").await;
    assert_eq!(list.status(), StatusCode::METHOD_NOT_ALLOWED);
    let update = put_json(app, &format!("/api/v1/carts/{cart}"), json!({})).await;
    assert_eq!(update.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn adding_the_same_product_merges_quantities(pool: PgPool) {
    let (_, sub) = seed_catalog(&pool, "Pantry").await;
    let tea = seed_product(&pool, sub, "Green tea", "4.50", 50).await;
    let app = common::build_test_app(pool);
    let cart = new_cart(app.clone()).await;
    let items_uri = format!("/api/v1/carts/{cart}/items");

    let first = post_json(app.clone(), &items_uri, json!({"product_id": tea, "quantity": 2})).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first = body_json(first).await;
    assert_eq!(first["quantity"], 2);

    let second = body_json(
        post_json(app.clone(), &items_uri, json!({"product_id": tea, "quantity": 3})).await,
    )
    .await;
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["quantity"], 5);

    let items = body_json(get(app.clone(), &items_uri).await).await;
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product"]["title"], "Green tea");
    assert_eq!(items[0]["total_price"], "22.50");

    let detail = body_json(get(app, &format!("/api/v1/carts/{cart}")).await).await;
    assert_eq!(detail["total_price"], "22.50");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_rejects_unknown_product_and_bad_quantity(pool: PgPool) {
    let (_, sub) = seed_catalog(&pool, "Pantry").await;
    let rice = seed_product(&pool, sub, "Rice", "3.00", 50).await;
    let app = common::build_test_app(pool);
    let cart = new_cart(app.clone()).await;
    let items_uri = format!("/api/v1/carts/{cart}/items");

    let unknown = post_json(
        app.clone(),
        &items_uri,
        json!({"product_id": 999_999, "quantity": 1}),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(unknown).await["error"],
        "No product with the given ID was found."
    );

    let zero = post_json(app, &items_uri, json!({"product_id": rice, "quantity": 0})).await;
    assert_eq!(zero.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn items_are_scoped_to_their_cart(pool: PgPool) {
    let (_, sub) = seed_catalog(&pool, "Pantry").await;
    let oats = seed_product(&pool, sub, "Oats", "2.00", 50).await;
    let app = common::build_test_app(pool);
    let mine = new_cart(app.clone()).await;
    let theirs = new_cart(app.clone()).await;

    let item = body_json(
        post_json(
            app.clone(),
            &format!("/api/v1/carts/{mine}/items"),
            json!({"product_id": oats, "quantity": 1}),
        )
        .await,
    )
    .await;
    let id = item["id"].as_i64().unwrap();

    let foreign = get(app.clone(), &format!("/api/v1/carts/{theirs}/items/{id}")).await;
    assert_eq!(foreign.status(), StatusCode::NOT_FOUND);
    let foreign_delete = delete(app.clone(), &format!("/api/v1/carts/{theirs}/items/{id}")).await;
    assert_eq!(foreign_delete.status(), StatusCode::NOT_FOUND);

    let own = body_json(get(app, &format!("/api/v1/carts/{mine}/items/{id}")).await).await;
    assert_eq!(own["product"]["id"], oats);
    assert_eq!(own["quantity"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_sets_quantity_and_put_is_not_allowed(pool: PgPool) {
    let (_, sub) = seed_catalog(&pool, "Pantry").await;
    let salt = seed_product(&pool, sub, "Salt", "1.00", 50).await;
    let app = common::build_test_app(pool);
    let cart = new_cart(app.clone()).await;
    let item = body_json(
        post_json(
            app.clone(),
            &format!("/api/v1/carts/{cart}/items"),
            json!({"product_id": salt, "quantity": 1}),
        )
        .await,
    )
    .await;
    let item_uri = format!("/api/v1/carts/{cart}/items/{}", item["id"]);

    let patched = patch_json(app.clone(), &item_uri, json!({"quantity": 7})).await;
    assert_eq!(patched.status(), StatusCode::OK);
    assert_eq!(body_json(patched).await, json!({"quantity": 7}));

    let put = put_json(app.clone(), &item_uri, json!({"quantity": 2})).await;
    assert_eq!(put.status(), StatusCode::METHOD_NOT_ALLOWED);

    let removed = delete(app, &item_uri).await;
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_cart_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let missing = "/api/v1/carts/00000000-0000-4000-8000-000000000000";

    assert_eq!(get(app.clone(), missing).await.status(), StatusCode::NOT_FOUND);
    let items = get(app.clone(), &format!("{missing}/items")).await;
    assert_eq!(items.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete(app, missing).await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_cart_removes_its_items(pool: PgPool) {
    let (_, sub) = seed_catalog(&pool, "Pantry").await;
    let jam = seed_product(&pool, sub, "Jam", "5.00", 50).await;
    let app = common::build_test_app(pool.clone());
    let cart = new_cart(app.clone()).await;
    post_json(
        app.clone(),
        &format!("/api/v1/carts/{cart}/items"),
        json!({"product_id": jam, "quantity": 2}),
    )
    .await;

    let response = delete(app, &format!("/api/v1/carts/{cart}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart_items")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
