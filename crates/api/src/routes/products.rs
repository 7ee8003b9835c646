//! Route definitions for the `/products` resource.
//!
//! Also nests review routes under `/products/{product_id}/reviews`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{product, review};
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> replace
/// PATCH  /{id}                              -> update
/// DELETE /{id}                              -> delete (405 when ordered)
///
/// GET    /{product_id}/reviews              -> list
/// POST   /{product_id}/reviews              -> create
/// GET    /{product_id}/reviews/{id}         -> get_by_id
/// PUT    /{product_id}/reviews/{id}         -> replace
/// PATCH  /{product_id}/reviews/{id}         -> update
/// DELETE /{product_id}/reviews/{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    let review_routes = Router::new()
        .route("/", get(review::list).post(review::create))
        .route(
            "/{id}",
            get(review::get_by_id)
                .put(review::replace)
                .patch(review::update)
                .delete(review::delete),
        );

    Router::new()
        .route("/", get(product::list).post(product::create))
        .route(
            "/{id}",
            get(product::get_by_id)
                .put(product::replace)
                .patch(product::update)
                .delete(product::delete),
        )
        .nest("/{product_id}/reviews", review_routes)
}
