//! Handlers for reviews nested under `/products/{product_id}/reviews`.
//!
//! Every lookup is scoped to the product in the path, so a review reached
//! through the wrong product is a 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::models::review::{CreateReview, Review, UpdateReview};
use storefront_db::repositories::{ProductRepo, ReviewRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Review",
        id,
    })
}

/// GET /api/v1/products/{product_id}/reviews
pub async fn list(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list_for_product(&state.pool, product_id).await?;
    Ok(Json(reviews))
}

/// POST /api/v1/products/{product_id}/reviews
pub async fn create(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    input.validate()?;
    if !ProductRepo::exists(&state.pool, product_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }));
    }
    let review = ReviewRepo::create(&state.pool, product_id, &input).await?;
    tracing::info!(review_id = review.id, product_id, "Review created");
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/v1/products/{product_id}/reviews/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Review>> {
    let review = ReviewRepo::find_for_product(&state.pool, product_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(review))
}

/// PUT /api/v1/products/{product_id}/reviews/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<CreateReview>,
) -> AppResult<Json<Review>> {
    input.validate()?;
    let review = ReviewRepo::replace(&state.pool, product_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(review))
}

/// PATCH /api/v1/products/{product_id}/reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateReview>,
) -> AppResult<Json<Review>> {
    input.validate()?;
    let review = ReviewRepo::update(&state.pool, product_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(review))
}

/// DELETE /api/v1/products/{product_id}/reviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if ReviewRepo::delete(&state.pool, product_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
