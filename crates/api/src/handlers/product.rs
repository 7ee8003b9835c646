//! Handlers for the `/products` resource.

use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::catalog::PRODUCT_DELETE_BLOCKED;
use storefront_core::error::CoreError;
use storefront_core::filter::ProductFilter;
use storefront_core::pagination::Page;
use storefront_core::search::ListParams;
use storefront_core::types::DbId;
use storefront_db::models::product::{CreateProduct, Product, UpdateProduct};
use storefront_db::repositories::{ProductListQuery, ProductRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::listing::{page_request, paginate};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

/// GET /api/v1/products
///
/// Supports `?id=`, `?unit_price__gt=`, `?unit_price__lt=`, `?search=`
/// (title, description), `?ordering=` (unit_price, last_update) and `?page=`.
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
    Query(filter): Query<ProductFilter>,
) -> AppResult<Json<Page<Product>>> {
    let page = page_request(params.page, state.config.api_page_size)?;
    let (rows, count) = ProductRepo::list(
        &state.pool,
        ProductListQuery {
            filter: &filter,
            search: params.search.as_deref(),
            ordering: params.ordering.as_deref(),
            page,
        },
    )
    .await?;
    Ok(Json(paginate(&uri, page, count, rows)?))
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    input.validate()?;
    let product = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(product_id = product.id, title = %product.title, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// PUT /api/v1/products/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateProduct>,
) -> AppResult<Json<Product>> {
    input.validate()?;
    let product = ProductRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// PATCH /api/v1/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    input.validate()?;
    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// DELETE /api/v1/products/{id}
///
/// Refused with 405 while any order item references the product.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    delete_guarded(&state, id).await
}

/// Shared by the public API and the console.
pub(crate) async fn delete_guarded(state: &AppState, id: DbId) -> AppResult<StatusCode> {
    let order_items = ProductRepo::count_order_items(&state.pool, id).await?;
    if order_items > 0 {
        tracing::info!(product_id = id, order_items, "Product delete blocked");
        return Err(AppError::Core(CoreError::Protected(
            PRODUCT_DELETE_BLOCKED.to_string(),
        )));
    }

    if ProductRepo::delete(&state.pool, id).await? {
        tracing::info!(product_id = id, "Product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
