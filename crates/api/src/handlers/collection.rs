//! Handlers for the `/collections` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::catalog::COLLECTION_DELETE_BLOCKED;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::models::collection::{Collection, CreateCollection, UpdateCollection};
use storefront_db::repositories::CollectionRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Collection",
        id,
    })
}

/// GET /api/v1/collections
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Collection>>> {
    let collections = CollectionRepo::list(&state.pool).await?;
    Ok(Json(collections))
}

/// POST /api/v1/collections
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCollection>,
) -> AppResult<(StatusCode, Json<Collection>)> {
    input.validate()?;
    let collection = CollectionRepo::create(&state.pool, &input).await?;
    tracing::info!(collection_id = collection.id, title = %collection.title, "Collection created");
    Ok((StatusCode::CREATED, Json(collection)))
}

/// GET /api/v1/collections/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Collection>> {
    let collection = CollectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(collection))
}

/// PUT /api/v1/collections/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCollection>,
) -> AppResult<Json<Collection>> {
    input.validate()?;
    let collection = CollectionRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(collection))
}

/// PATCH /api/v1/collections/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCollection>,
) -> AppResult<Json<Collection>> {
    input.validate()?;
    let collection = CollectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(collection))
}

/// DELETE /api/v1/collections/{id}
///
/// Refused with 405 while any subcollection of the collection holds a
/// product. Empty subcollections go with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    delete_guarded(&state, id).await
}

pub(crate) async fn delete_guarded(state: &AppState, id: DbId) -> AppResult<StatusCode> {
    CollectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let products = CollectionRepo::count_products(&state.pool, id).await?;
    if products > 0 {
        tracing::info!(collection_id = id, products, "Collection delete blocked");
        return Err(AppError::Core(CoreError::Protected(
            COLLECTION_DELETE_BLOCKED.to_string(),
        )));
    }

    if CollectionRepo::delete(&state.pool, id).await? {
        tracing::info!(collection_id = id, "Collection deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
