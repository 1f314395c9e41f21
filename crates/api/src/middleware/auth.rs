//! Session-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use greenlight_core::types::DbId;
use greenlight_db::repositories::SessionRepo;

use crate::auth::cookie::token_from_headers;
use crate::auth::jwt::{hash_token_id, validate_token};
use crate::error::AppError;
use crate::state::AppState;

/// Message returned for every authentication failure.
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Authenticated user extracted from the `session` cookie or a Bearer token.
///
/// The token must carry a valid signature, be unexpired, and map to a
/// session row that has not been revoked.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    pub email: String,
    /// The user's role name (`"admin"` or `"crew"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers)
            .ok_or_else(|| AppError::unauthorized(NOT_AUTHENTICATED))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| AppError::unauthorized(NOT_AUTHENTICATED))?;

        let session_hash = hash_token_id(&claims.jti);
        let session = SessionRepo::find_active_by_token_hash(&state.pool, &session_hash)
            .await?
            .ok_or_else(|| AppError::unauthorized(NOT_AUTHENTICATED))?;

        if session.user_id != claims.sub {
            tracing::warn!(
                session_id = session.id,
                token_sub = claims.sub,
                "Session row does not belong to token subject"
            );
            return Err(AppError::unauthorized(NOT_AUTHENTICATED));
        }

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        })
    }
}
