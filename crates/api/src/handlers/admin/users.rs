//! Console user management.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::roles::ROLE_CUSTOMER;
use storefront_db::models::user::{CreateUser, CreateUserRequest, UserResponse};
use storefront_db::repositories::{RoleRepo, UserRepo};
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/users
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let mut responses = Vec::with_capacity(users.len());
    for user in users {
        let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
        responses.push(UserResponse::from_user(user, role));
    }
    Ok(Json(responses))
}

/// POST /api/v1/admin/users
///
/// Role defaults to `customer`. Usernames are unique (409 on conflict).
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role_name = input.role.as_deref().unwrap_or(ROLE_CUSTOMER);
    let role = RoleRepo::find_by_name(&state.pool, role_name)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("Unknown role: {role_name}")))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
            role_id: role.id,
        },
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        role = %role.name,
        created_by = admin.user_id,
        "User created"
    );
    Ok((StatusCode::CREATED, Json(UserResponse::from_user(user, role.name))))
}
