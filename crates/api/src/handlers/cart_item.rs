//! Handlers for items nested under `/carts/{cart_id}/items`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::catalog::UNKNOWN_PRODUCT;
use storefront_core::error::CoreError;
use storefront_core::types::{CartId, DbId};
use storefront_db::models::cart::{AddCartItem, AddedCartItem, CartLine, UpdateCartItem};
use storefront_db::repositories::{CartItemRepo, CartRepo, ProductRepo};
use validator::Validate;

use super::cart::cart_not_found;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "CartItem",
        id,
    })
}

async fn ensure_cart(state: &AppState, cart_id: CartId) -> AppResult<()> {
    if CartRepo::exists(&state.pool, cart_id).await? {
        Ok(())
    } else {
        Err(cart_not_found(cart_id))
    }
}

/// GET /api/v1/carts/{cart_id}/items
pub async fn list(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
) -> AppResult<Json<Vec<CartLine>>> {
    ensure_cart(&state, cart_id).await?;
    let rows = CartItemRepo::list_for_cart(&state.pool, cart_id).await?;
    Ok(Json(rows.into_iter().map(CartLine::from).collect()))
}

/// POST /api/v1/carts/{cart_id}/items
///
/// Adding a product already in the cart increases that line's quantity.
pub async fn create(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
    Json(input): Json<AddCartItem>,
) -> AppResult<(StatusCode, Json<AddedCartItem>)> {
    ensure_cart(&state, cart_id).await?;
    input.validate()?;
    if !ProductRepo::exists(&state.pool, input.product_id).await? {
        return Err(AppError::Core(CoreError::Validation(
            UNKNOWN_PRODUCT.to_string(),
        )));
    }

    let item = CartItemRepo::add(&state.pool, cart_id, &input).await?;
    tracing::info!(
        cart_id = %cart_id,
        product_id = item.product_id,
        quantity = item.quantity,
        "Cart item added"
    );
    Ok((StatusCode::CREATED, Json(AddedCartItem::from(item))))
}

/// GET /api/v1/carts/{cart_id}/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((cart_id, id)): Path<(CartId, DbId)>,
) -> AppResult<Json<CartLine>> {
    ensure_cart(&state, cart_id).await?;
    let row = CartItemRepo::find_for_cart(&state.pool, cart_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(CartLine::from(row)))
}

/// PATCH /api/v1/carts/{cart_id}/items/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((cart_id, id)): Path<(CartId, DbId)>,
    Json(input): Json<UpdateCartItem>,
) -> AppResult<Json<UpdateCartItem>> {
    ensure_cart(&state, cart_id).await?;
    input.validate()?;
    let item = CartItemRepo::update_quantity(&state.pool, cart_id, id, input.quantity)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(UpdateCartItem {
        quantity: item.quantity,
    }))
}

/// DELETE /api/v1/carts/{cart_id}/items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((cart_id, id)): Path<(CartId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_cart(&state, cart_id).await?;
    if CartItemRepo::delete(&state.pool, cart_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
