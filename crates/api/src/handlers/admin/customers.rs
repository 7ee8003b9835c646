//! Console customer list and change form.

use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::pagination::Page;
use storefront_core::search::ListParams;
use storefront_core::types::DbId;
use storefront_db::models::console::CustomerChangeEntry;
use storefront_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use storefront_db::repositories::{ConsoleRepo, CustomerRepo};
use validator::Validate;

use super::change_list;
use crate::error::{AppError, AppResult};
use crate::listing::paginate;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Customer",
        id,
    })
}

/// GET /api/v1/admin/customers
///
/// Ordered by first then last name; search matches name prefixes.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<CustomerChangeEntry>>> {
    let query = change_list(&params)?;
    let (rows, count) = ConsoleRepo::customers(&state.pool, query).await?;
    Ok(Json(paginate(&uri, query.page, count, rows)?))
}

/// POST /api/v1/admin/customers
///
/// Links a customer profile to an existing user.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    input.validate()?;
    let customer = CustomerRepo::create(&state.pool, &input).await?;
    tracing::info!(customer_id = customer.id, user_id = customer.user_id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/v1/admin/customers/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(customer))
}

/// PATCH /api/v1/admin/customers/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    input.validate()?;
    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(customer))
}
