//! Console order list and inline order creation.

use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::console::validate_order_item_count;
use storefront_core::error::CoreError;
use storefront_core::pagination::Page;
use storefront_core::search::ListParams;
use storefront_core::types::DbId;
use storefront_db::models::console::OrderChangeEntry;
use storefront_db::models::order::{CreateOrder, OrderDetail};
use storefront_db::repositories::{ConsoleRepo, OrderRepo};
use validator::Validate;

use super::change_list;
use crate::error::{AppError, AppResult};
use crate::listing::paginate;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Order",
        id,
    })
}

/// GET /api/v1/admin/orders
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<OrderChangeEntry>>> {
    let query = change_list(&params)?;
    let (rows, count) = ConsoleRepo::orders(&state.pool, query).await?;
    Ok(Json(paginate(&uri, query.page, count, rows)?))
}

/// POST /api/v1/admin/orders
///
/// Places an order with 1 to 10 inline items. Unit prices are copied from
/// the products at the time of the order.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<OrderDetail>)> {
    validate_order_item_count(input.items.len())?;
    input.validate()?;

    let order = OrderRepo::create(&state.pool, &input).await?;
    tracing::info!(
        order_id = order.order.id,
        customer_id = order.order.customer_id,
        items = order.items.len(),
        user_id = admin.user_id,
        "Order placed"
    );
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/v1/admin/orders/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OrderDetail>> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(order))
}

/// DELETE /api/v1/admin/orders/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if OrderRepo::delete(&state.pool, id).await? {
        tracing::info!(order_id = id, "Order deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
