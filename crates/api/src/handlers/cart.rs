//! Handlers for the `/carts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::types::CartId;
use storefront_db::models::cart::{Cart, CartDetail};
use storefront_db::repositories::{CartItemRepo, CartRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn cart_not_found(id: CartId) -> AppError {
    AppError::Core(CoreError::NotFoundByKey {
        entity: "Cart",
        key: id.to_string(),
    })
}

/// POST /api/v1/carts
///
/// Takes no body; returns the new, empty cart.
pub async fn create(State(state): State<AppState>) -> AppResult<(StatusCode, Json<CartDetail>)> {
    let cart = CartRepo::create(&state.pool).await?;
    tracing::info!(cart_id = %cart.id, "Cart created");
    Ok((StatusCode::CREATED, Json(CartDetail::new(cart, Vec::new()))))
}

/// GET /api/v1/carts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<CartId>,
) -> AppResult<Json<CartDetail>> {
    let cart: Cart = CartRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| cart_not_found(id))?;
    let rows = CartItemRepo::list_for_cart(&state.pool, id).await?;
    Ok(Json(CartDetail::new(cart, rows)))
}

/// DELETE /api/v1/carts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<CartId>) -> AppResult<StatusCode> {
    if CartRepo::delete(&state.pool, id).await? {
        tracing::info!(cart_id = %id, "Cart deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(cart_not_found(id))
    }
}
