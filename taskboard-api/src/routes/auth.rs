/// Token issuance endpoints
///
/// Authentication is username/password against the identity store; success
/// yields JWT access and refresh tokens used by every other endpoint.
///
/// # Endpoints
///
/// - `POST /auth/login` - Verify credentials, issue tokens
/// - `POST /auth/refresh` - Exchange a refresh token for a new access token

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    validation,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use taskboard_shared::{
    auth::{jwt, password},
    models::{credential::Credential, user::User},
};
use validator::Validate;

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username
    #[validate(required(message = "username is required"))]
    pub username: Option<String>,

    /// Password
    #[validate(required(message = "password is required"))]
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// User ID
    pub user_id: String,

    /// Username
    pub username: String,

    /// Access token (24h)
    pub access_token: String,

    /// Refresh token (30d)
    pub refresh_token: String,
}

/// Refresh token request
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token
    pub refresh_token: String,
}

/// Refresh token response
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// New access token (24h)
    pub access_token: String,
}

/// Login endpoint
///
/// Verifies the password against the identity store credential and returns
/// JWT tokens. The response does not reveal whether the username or the
/// password was wrong.
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `401 Unauthorized`: Invalid credentials
/// - `500 Internal Server Error`: Infrastructure failure
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    if let Err(errors) = validation::check(&req) {
        tracing::warn!("Login failed due to validation error");
        return Err(ApiError::ValidationError(errors));
    }

    // Both are Some after validation
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let credential = Credential::find_by_username(&state.db, &username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid username or password".to_string()))?;

    let valid = password::verify_password(&password, &credential.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    // The application user row shares the credential's username
    let user = User::find_by_username(&state.db, &username)
        .await?
        .ok_or_else(|| {
            ApiError::InternalError(format!("No application user for credential: {}", username))
        })?;

    let access_claims = jwt::Claims::new(user.id, user.username.clone(), jwt::TokenType::Access);
    let refresh_claims = jwt::Claims::new(user.id, user.username.clone(), jwt::TokenType::Refresh);

    let access_token = jwt::create_token(&access_claims, state.jwt_secret())?;
    let refresh_token = jwt::create_token(&refresh_claims, state.jwt_secret())?;

    tracing::info!(username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        user_id: user.id.to_string(),
        username: user.username,
        access_token,
        refresh_token,
    }))
}

/// Token refresh endpoint
///
/// # Errors
///
/// - `401 Unauthorized`: Invalid or expired refresh token
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> ApiResult<Json<RefreshResponse>> {
    let access_token = jwt::refresh_access_token(&req.refresh_token, state.jwt_secret())?;

    Ok(Json(RefreshResponse { access_token }))
}
