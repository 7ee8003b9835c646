pub mod admin;
pub mod auth;
pub mod carts;
pub mod collections;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
///
/// /products                                        list, create
/// /products/{id}                                   get, replace, update, delete
/// /products/{product_id}/reviews                   list, create
/// /products/{product_id}/reviews/{id}              get, replace, update, delete
///
/// /collections                                     list, create
/// /collections/{id}                                get, replace, update, delete
///
/// /carts                                           create
/// /carts/{id}                                      get, delete
/// /carts/{cart_id}/items                           list, add
/// /carts/{cart_id}/items/{id}                      get, update quantity, delete
///
/// /admin/products                                  change list, create (admin only)
/// /admin/products/{id}                             get, update, delete
/// /admin/products/actions/clear-inventory          bulk action (POST)
/// /admin/collections                               change list, create
/// /admin/collections/{id}                          update, delete
/// /admin/subcollections                            change list, create
/// /admin/subcollections/{id}                       get, update, delete
/// /admin/customers                                 change list, create
/// /admin/customers/{id}                            get, update
/// /admin/orders                                    change list, create
/// /admin/orders/{id}                               get, delete
/// /admin/users                                     list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login only; no refresh flow).
        .nest("/auth", auth::router())
        // Operator console.
        .nest("/admin", admin::router())
        // Catalog (also nests product reviews).
        .nest("/products", products::router())
        .nest("/collections", collections::router())
        // Anonymous carts and their items.
        .nest("/carts", carts::router())
}
