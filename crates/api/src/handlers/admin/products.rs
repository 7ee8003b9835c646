//! Console product list, change form and bulk actions.

use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use storefront_core::console::clear_inventory_message;
use storefront_core::error::CoreError;
use storefront_core::pagination::Page;
use storefront_core::search::ListParams;
use storefront_core::types::DbId;
use storefront_db::models::console::{
    ActionOutcome, ProductChangeEntry, ProductChangeFilter, ProductSelection,
};
use storefront_db::models::product::{CreateProduct, Product, UpdateProduct};
use storefront_db::repositories::{ConsoleRepo, ProductRepo};
use validator::Validate;

use super::change_list;
use crate::error::{AppError, AppResult};
use crate::handlers::product::delete_guarded;
use crate::listing::paginate;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/products
///
/// Filters: `subcollection_id`, `collection_id`, `last_update` (`today`,
/// `past_7_days`, `this_month`, `this_year`). Search on title; ordering on
/// title, unit_price, inventory, inventory_status.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
    Query(filter): Query<ProductChangeFilter>,
) -> AppResult<Json<Page<ProductChangeEntry>>> {
    let query = change_list(&params)?;
    let (rows, count) = ConsoleRepo::products(&state.pool, &filter, query, Utc::now()).await?;
    Ok(Json(paginate(&uri, query.page, count, rows)?))
}

/// POST /api/v1/admin/products
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    input.validate()?;
    let product = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(
        product_id = product.id,
        user_id = admin.user_id,
        "Product created from console"
    );
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/admin/products/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(product))
}

/// PATCH /api/v1/admin/products/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    input.validate()?;
    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(product))
}

/// DELETE /api/v1/admin/products/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    delete_guarded(&state, id).await
}

/// POST /api/v1/admin/products/actions/clear-inventory
///
/// Sets inventory to zero on exactly the selected products.
pub async fn clear_inventory(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(selection): Json<ProductSelection>,
) -> AppResult<Json<ActionOutcome>> {
    let updated = ConsoleRepo::clear_inventory(&state.pool, &selection.ids).await?;
    tracing::info!(updated, user_id = admin.user_id, "Inventory cleared");
    Ok(Json(ActionOutcome {
        updated,
        message: clear_inventory_message(updated),
    }))
}
