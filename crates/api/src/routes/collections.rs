//! Route definitions for the `/collections` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::collection;
use crate::state::AppState;

/// Routes mounted at `/collections`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> replace
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete (405 while it holds products)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(collection::list).post(collection::create))
        .route(
            "/{id}",
            get(collection::get_by_id)
                .put(collection::replace)
                .patch(collection::update)
                .delete(collection::delete),
        )
}
