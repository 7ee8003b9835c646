//! Route definitions for the `/carts` resource.
//!
//! Carts have no list or update; cart items have no PUT. Axum answers the
//! missing methods with 405.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{cart, cart_item};
use crate::state::AppState;

/// Routes mounted at `/carts`.
///
/// ```text
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// DELETE /{id}                      -> delete
///
/// GET    /{cart_id}/items           -> list
/// POST   /{cart_id}/items           -> create
/// GET    /{cart_id}/items/{id}      -> get_by_id
/// PATCH  /{cart_id}/items/{id}      -> update
/// DELETE /{cart_id}/items/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    let item_routes = Router::new()
        .route("/", get(cart_item::list).post(cart_item::create))
        .route(
            "/{id}",
            get(cart_item::get_by_id)
                .patch(cart_item::update)
                .delete(cart_item::delete),
        );

    Router::new()
        .route("/", post(cart::create))
        .route("/{id}", get(cart::get_by_id).delete(cart::delete))
        .nest("/{cart_id}/items", item_routes)
}
