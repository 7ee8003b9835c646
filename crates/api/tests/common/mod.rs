#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tower::ServiceExt;

use storefront_api::auth::jwt::{generate_access_token, JwtConfig};
use storefront_api::auth::password::hash_password;
use storefront_api::config::ServerConfig;
use storefront_api::router::build_app_router;
use storefront_api::state::AppState;
use storefront_core::roles::{ROLE_ADMIN, ROLE_CUSTOMER};
use storefront_core::types::DbId;
use storefront_db::models::collection::CreateCollection;
use storefront_db::models::product::CreateProduct;
use storefront_db::models::subcollection::CreateSubCollection;
use storefront_db::models::user::{CreateUser, User};
use storefront_db::repositories::{
    CollectionRepo, ProductRepo, RoleRepo, SubCollectionRepo, UserRepo,
};

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        api_page_size: 10,
        jwt: JwtConfig {
            secret: "test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), None).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), None).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), Some(token)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user with `role` and the shared test password.
pub async fn create_user(pool: &PgPool, username: &str, role: &str) -> User {
    let role = RoleRepo::find_by_name(pool, role).await.unwrap().unwrap();
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
            first_name: String::new(),
            last_name: String::new(),
            role_id: role.id,
        },
    )
    .await
    .unwrap()
}

/// A valid token for a fresh admin user.
pub async fn admin_token(pool: &PgPool) -> String {
    let user = create_user(pool, "operator", ROLE_ADMIN).await;
    generate_access_token(user.id, ROLE_ADMIN, &test_config().jwt).unwrap()
}

/// A valid token for a fresh non-admin user.
pub async fn customer_token(pool: &PgPool) -> String {
    let user = create_user(pool, "shopper", ROLE_CUSTOMER).await;
    generate_access_token(user.id, ROLE_CUSTOMER, &test_config().jwt).unwrap()
}

/// Create a collection with one subcollection; returns `(collection_id, subcollection_id)`.
pub async fn seed_catalog(pool: &PgPool, title: &str) -> (DbId, DbId) {
    let collection = CollectionRepo::create(
        pool,
        &CreateCollection {
            title: title.to_string(),
            slug: None,
            featured_product_id: None,
        },
    )
    .await
    .unwrap();
    let sub = SubCollectionRepo::create(
        pool,
        &CreateSubCollection {
            title: format!("{title} basics"),
            slug: None,
            collection_id: collection.id,
            featured_product_id: None,
        },
    )
    .await
    .unwrap();
    (collection.id, sub.id)
}

/// Create a product in `subcollection_id` priced at `price` (e.g. `"19.99"`).
pub async fn seed_product(
    pool: &PgPool,
    subcollection_id: DbId,
    title: &str,
    price: &str,
    inventory: i32,
) -> DbId {
    ProductRepo::create(
        pool,
        &CreateProduct {
            title: title.to_string(),
            slug: None,
            description: Some(format!("{title} description")),
            unit_price: price.parse::<Decimal>().unwrap(),
            inventory,
            subcollection_id,
        },
    )
    .await
    .unwrap()
    .id
}
