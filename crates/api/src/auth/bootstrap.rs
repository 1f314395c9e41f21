//! Demo account creation at startup.

use greenlight_core::roles::ROLE_ADMIN;
use greenlight_db::models::user::CreateUser;
use greenlight_db::repositories::UserRepo;
use greenlight_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::DemoUser;
use crate::error::{AppError, AppResult};

/// Create the demo admin account unless a user with that email exists.
///
/// Returns `true` when a new user was inserted.
pub async fn ensure_demo_user(pool: &DbPool, demo: &DemoUser) -> AppResult<bool> {
    if UserRepo::find_by_email(pool, &demo.email).await?.is_some() {
        tracing::info!(email = %demo.email, "Demo user already exists, skipping creation");
        return Ok(false);
    }

    let password_hash = hash_password(&demo.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: demo.email.clone(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, email = %user.email, role = %user.role, "Created demo user");
    Ok(true)
}
