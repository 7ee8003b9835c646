//! Console collection list and change form.

use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::pagination::Page;
use storefront_core::search::ListParams;
use storefront_core::types::DbId;
use storefront_db::models::collection::{Collection, CreateCollection, UpdateCollection};
use storefront_db::models::console::CollectionChangeEntry;
use storefront_db::repositories::{CollectionRepo, ConsoleRepo};
use validator::Validate;

use super::change_list;
use crate::error::{AppError, AppResult};
use crate::handlers::collection::delete_guarded;
use crate::listing::paginate;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/collections
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<CollectionChangeEntry>>> {
    let query = change_list(&params)?;
    let (rows, count) = ConsoleRepo::collections(&state.pool, query).await?;
    Ok(Json(paginate(&uri, query.page, count, rows)?))
}

/// POST /api/v1/admin/collections
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCollection>,
) -> AppResult<(StatusCode, Json<Collection>)> {
    input.validate()?;
    let collection = CollectionRepo::create(&state.pool, &input).await?;
    tracing::info!(collection_id = collection.id, "Collection created from console");
    Ok((StatusCode::CREATED, Json(collection)))
}

/// PATCH /api/v1/admin/collections/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCollection>,
) -> AppResult<Json<Collection>> {
    input.validate()?;
    let collection = CollectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collection",
            id,
        }))?;
    Ok(Json(collection))
}

/// DELETE /api/v1/admin/collections/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    delete_guarded(&state, id).await
}
