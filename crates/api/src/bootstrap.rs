//! First-run creation of an operator account.
//!
//! When `BOOTSTRAP_ADMIN_USERNAME` and `BOOTSTRAP_ADMIN_PASSWORD` are set
//! and no user with that username exists, an active `admin` user is created
//! so the console can be reached on a fresh database.

use storefront_core::error::CoreError;
use storefront_core::roles::ROLE_ADMIN;
use storefront_db::models::user::{CreateUser, User};
use storefront_db::repositories::{RoleRepo, UserRepo};
use storefront_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};

/// Credentials for the bootstrap operator.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl BootstrapAdmin {
    /// Read the bootstrap variables. Returns `None` unless both the
    /// username and the password are set and non-empty.
    ///
    /// | Env Var                    | Default                   |
    /// |----------------------------|---------------------------|
    /// | `BOOTSTRAP_ADMIN_USERNAME` | --                        |
    /// | `BOOTSTRAP_ADMIN_PASSWORD` | --                        |
    /// | `BOOTSTRAP_ADMIN_EMAIL`    | `{username}@localhost`    |
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("BOOTSTRAP_ADMIN_USERNAME")
            .ok()
            .filter(|s| !s.is_empty())?;
        let password = std::env::var("BOOTSTRAP_ADMIN_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty())?;
        let email = std::env::var("BOOTSTRAP_ADMIN_EMAIL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("{username}@localhost"));
        Some(Self {
            username,
            password,
            email,
        })
    }
}

/// Create the operator unless the username is already taken.
///
/// Returns the new user, or `None` when one already existed.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<Option<User>> {
    if UserRepo::find_by_username(pool, &admin.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %admin.username, "Bootstrap admin already present");
        return Ok(None);
    }

    validate_password_strength(&admin.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = RoleRepo::find_by_name(pool, ROLE_ADMIN)
        .await?
        .ok_or_else(|| AppError::InternalError("admin role is not seeded".into()))?;

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            first_name: String::new(),
            last_name: String::new(),
            role_id: role.id,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
    Ok(Some(user))
}
