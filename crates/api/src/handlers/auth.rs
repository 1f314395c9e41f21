//! Handlers for the identity/session gateway (register, login, logout, me).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderName};
use axum::Json;
use chrono::{TimeZone, Utc};
use greenlight_db::models::session::CreateSession;
use greenlight_db::models::user::UserInfo;
use greenlight_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{clear_session_cookie, session_cookie, token_from_headers};
use crate::auth::jwt::{generate_session_token, hash_token_id, validate_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, NOT_AUTHENTICATED};
use crate::state::AppState;

/// Message for any credential mismatch; never reveals which half was wrong.
const INVALID_CREDENTIALS: &str = "Incorrect email or password.";

/// Message returned by the disabled registration endpoint.
pub const REGISTRATION_DISABLED: &str =
    "Registration disabled for demo. Use the demo account to log in.";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: the user plus the token also set as the `session` cookie.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserInfo,
    pub token: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
}

/// Body of `GET /api/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

type WithCookie<T> = ([(HeaderName, String); 1], Json<T>);

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/register
///
/// Self-service registration is disabled; always 403.
pub async fn register() -> AppResult<Json<MessageResponse>> {
    Err(AppError::forbidden(REGISTRATION_DISABLED))
}

/// POST /api/login
///
/// Authenticate with email + password. Creates a session row and sets the
/// `session` cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<WithCookie<LoginResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(user_id = user.id, "Rejected login with wrong password");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    let (token, claims) =
        generate_session_token(user.id, &user.email, &user.role, &state.config.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let expires_at = Utc
        .timestamp_opt(claims.exp, 0)
        .single()
        .ok_or_else(|| AppError::InternalError("Session expiry out of range".into()))?;

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token_hash: hash_token_id(&claims.jti),
            expires_at,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    let expires_in = state.config.jwt.session_expiry_secs();
    let cookie = session_cookie(&token, expires_in, state.config.secure_cookies);

    Ok((
        [(SET_COOKIE, cookie)],
        Json(LoginResponse {
            user: UserInfo::from(&user),
            token,
            expires_in,
        }),
    ))
}

/// POST /api/logout
///
/// Revokes the caller's session if it presented a valid token, and always
/// clears the cookie. Logging out without a session is not an error.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<WithCookie<MessageResponse>> {
    if let Some(claims) =
        token_from_headers(&headers).and_then(|t| validate_token(t, &state.config.jwt).ok())
    {
        let revoked =
            SessionRepo::revoke_by_token_hash(&state.pool, &hash_token_id(&claims.jti)).await?;
        tracing::info!(user_id = claims.sub, revoked, "User logged out");
    }

    Ok((
        [(SET_COOKIE, clear_session_cookie(state.config.secure_cookies))],
        Json(MessageResponse {
            message: "Logged out",
        }),
    ))
}

/// GET /api/me
///
/// The identity behind the current session, or 401.
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<MeResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::unauthorized(NOT_AUTHENTICATED))?;

    Ok(Json(MeResponse {
        user: UserInfo::from(&user),
    }))
}
