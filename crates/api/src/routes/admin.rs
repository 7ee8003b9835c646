//! Route definitions for the operator console at `/admin`.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::admin::{collections, customers, orders, products, subcollections, users};
use crate::state::AppState;

/// Routes mounted at `/admin`. All handlers require the `admin` role.
///
/// ```text
/// GET    /products                              -> products::list
/// POST   /products                              -> products::create
/// POST   /products/actions/clear-inventory      -> products::clear_inventory
/// GET    /products/{id}                         -> products::get_by_id
/// PATCH  /products/{id}                         -> products::update
/// DELETE /products/{id}                         -> products::delete
///
/// GET    /collections                           -> collections::list
/// POST   /collections                           -> collections::create
/// PATCH  /collections/{id}                      -> collections::update
/// DELETE /collections/{id}                      -> collections::delete
///
/// GET    /subcollections                        -> subcollections::list
/// POST   /subcollections                        -> subcollections::create
/// GET    /subcollections/{id}                   -> subcollections::get_by_id
/// PATCH  /subcollections/{id}                   -> subcollections::update
/// DELETE /subcollections/{id}                   -> subcollections::delete
///
/// GET    /customers                             -> customers::list
/// POST   /customers                             -> customers::create
/// GET    /customers/{id}                        -> customers::get_by_id
/// PATCH  /customers/{id}                        -> customers::update
///
/// GET    /orders                                -> orders::list
/// POST   /orders                                -> orders::create
/// GET    /orders/{id}                           -> orders::get_by_id
/// DELETE /orders/{id}                           -> orders::delete
///
/// GET    /users                                 -> users::list
/// POST   /users                                 -> users::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/actions/clear-inventory",
            post(products::clear_inventory),
        )
        .route(
            "/products/{id}",
            get(products::get_by_id)
                .patch(products::update)
                .delete(products::delete),
        )
        .route(
            "/collections",
            get(collections::list).post(collections::create),
        )
        .route(
            "/collections/{id}",
            patch(collections::update).delete(collections::delete),
        )
        .route(
            "/subcollections",
            get(subcollections::list).post(subcollections::create),
        )
        .route(
            "/subcollections/{id}",
            get(subcollections::get_by_id)
                .patch(subcollections::update)
                .delete(subcollections::delete),
        )
        .route("/customers", get(customers::list).post(customers::create))
        .route(
            "/customers/{id}",
            get(customers::get_by_id).patch(customers::update),
        )
        .route("/orders", get(orders::list).post(orders::create))
        .route(
            "/orders/{id}",
            get(orders::get_by_id).delete(orders::delete),
        )
        .route("/users", get(users::list).post(users::create))
}
