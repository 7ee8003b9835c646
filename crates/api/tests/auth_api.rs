//! HTTP-level integration tests for login and the bootstrap operator.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, get_auth, post_json, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;
use storefront_api::auth::jwt::validate_token;
use storefront_api::bootstrap::{ensure_admin, BootstrapAdmin};
use storefront_core::roles::{ROLE_ADMIN, ROLE_CUSTOMER};
use storefront_db::repositories::UserRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_a_token_for_the_console(pool: PgPool) {
    let user = create_user(&pool, "boss", ROLE_ADMIN).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({"username": "boss", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["expires_in"], 3600);
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["role"], "admin");

    let token = json["access_token"].as_str().unwrap();
    let claims = validate_token(token, &common::test_config().jwt).unwrap();
    assert_eq!(claims.sub, user.id);

    let console = get_auth(app, "/api/v1/admin/users", token).await;
    assert_eq!(console.status(), StatusCode::OK);

    let refreshed = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert!(refreshed.last_login_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bad_credentials_are_unauthorized(pool: PgPool) {
    create_user(&pool, "shopper", ROLE_CUSTOMER).await;
    let app = common::build_test_app(pool);

    let wrong_password = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({"username": "shopper", "password": "not-the-password"}),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown_user = post_json(
        app,
        "/api/v1/auth/login",
        json!({"username": "ghost", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_user_is_forbidden(pool: PgPool) {
    let user = create_user(&pool, "retired", ROLE_ADMIN).await;
    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"username": "retired", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_admin_is_created_once(pool: PgPool) {
    let admin = BootstrapAdmin {
        username: "root".into(),
        password: "bootstrap-pass".into(),
        email: "root@example.com".into(),
    };

    let created = ensure_admin(&pool, &admin).await.unwrap();
    assert!(created.is_some());
    let again = ensure_admin(&pool, &admin).await.unwrap();
    assert!(again.is_none());

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"username": "root", "password": "bootstrap-pass"}),
    )
    .await;
    assert_eq!(body_json(response).await["user"]["role"], "admin");
}
