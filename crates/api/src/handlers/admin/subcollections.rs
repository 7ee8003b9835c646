//! Console subcollection list and change form.

use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::catalog::SUBCOLLECTION_DELETE_BLOCKED;
use storefront_core::error::CoreError;
use storefront_core::pagination::Page;
use storefront_core::search::ListParams;
use storefront_core::types::DbId;
use storefront_db::models::console::{SubCollectionChangeEntry, SubCollectionChangeFilter};
use storefront_db::models::subcollection::{
    CreateSubCollection, SubCollection, UpdateSubCollection,
};
use storefront_db::repositories::{ConsoleRepo, SubCollectionRepo};
use validator::Validate;

use super::change_list;
use crate::error::{AppError, AppResult};
use crate::listing::paginate;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SubCollection",
        id,
    })
}

/// GET /api/v1/admin/subcollections
///
/// Filter: `collection_id`. Search on title and collection title.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
    Query(filter): Query<SubCollectionChangeFilter>,
) -> AppResult<Json<Page<SubCollectionChangeEntry>>> {
    let query = change_list(&params)?;
    let (rows, count) = ConsoleRepo::subcollections(&state.pool, &filter, query).await?;
    Ok(Json(paginate(&uri, query.page, count, rows)?))
}

/// POST /api/v1/admin/subcollections
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSubCollection>,
) -> AppResult<(StatusCode, Json<SubCollection>)> {
    input.validate()?;
    let subcollection = SubCollectionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        subcollection_id = subcollection.id,
        collection_id = subcollection.collection_id,
        "SubCollection created"
    );
    Ok((StatusCode::CREATED, Json(subcollection)))
}

/// GET /api/v1/admin/subcollections/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SubCollection>> {
    let subcollection = SubCollectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(subcollection))
}

/// PATCH /api/v1/admin/subcollections/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubCollection>,
) -> AppResult<Json<SubCollection>> {
    input.validate()?;
    let subcollection = SubCollectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(subcollection))
}

/// DELETE /api/v1/admin/subcollections/{id}
///
/// Refused with 405 while the subcollection holds products.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let products = SubCollectionRepo::count_products(&state.pool, id).await?;
    if products > 0 {
        tracing::info!(subcollection_id = id, products, "SubCollection delete blocked");
        return Err(AppError::Core(CoreError::Protected(
            SUBCOLLECTION_DELETE_BLOCKED.to_string(),
        )));
    }

    if SubCollectionRepo::delete(&state.pool, id).await? {
        tracing::info!(subcollection_id = id, "SubCollection deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
