/// User collection endpoints
///
/// # Endpoints
///
/// - `GET /users/` - List all users (password material never serialized)
/// - `POST /users/` - Create a user and its identity store credential
///
/// User creation writes two rows, the identity store credential and the
/// application user, in one transaction so they cannot diverge.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    validation,
};
use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use taskboard_shared::{
    auth::{middleware::AuthContext, password},
    models::{
        credential::Credential,
        user::{CreateUser, User},
    },
};
use validator::Validate;

/// Create user request
///
/// Required fields are `Option` so a missing field surfaces as a field-level
/// validation error naming the field, not a deserialization failure. Only
/// presence is validated for the password; there is no strength policy here.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Unique username
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username must not be empty")
    )]
    pub username: Option<String>,

    /// Password, stored only as an Argon2id hash in the identity store
    #[validate(required(message = "password is required"))]
    pub password: Option<String>,

    /// Optional email address
    pub email: Option<String>,
}

/// Serialized user, never includes password material
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// Username
    pub username: String,

    /// Email address; empty string when not provided
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
        }
    }
}

/// Creation confirmation
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// List users endpoint
///
/// Returns all users as `{username, email}` pairs.
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid credential
/// - `500 Internal Server Error`: Infrastructure failure
pub async fn list_users(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = User::list(&state.db).await?;

    tracing::info!(accessed_by = %auth.username, "User list accessed");

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create user endpoint
///
/// Hashes the password and creates the identity store credential together
/// with the application user row; both share the username.
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed (field error map)
/// - `401 Unauthorized`: Missing or invalid credential
/// - `409 Conflict`: Username already exists
/// - `500 Internal Server Error`: Infrastructure failure
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    if let Err(errors) = validation::check(&req) {
        tracing::warn!("User creation failed due to validation error");
        return Err(ApiError::ValidationError(errors));
    }

    // Required fields are Some after validation
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    let email = req.email.unwrap_or_default();

    let password_hash = password::hash_password(&password)?;

    // Credential and user row must not diverge: single transaction
    let mut tx = state.db.begin().await?;

    Credential::create(&mut *tx, &username, &password_hash).await?;
    let user = User::create(
        &mut *tx,
        CreateUser {
            username: username.clone(),
            email,
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(username = %user.username, "New user created securely");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created securely".to_string(),
        }),
    ))
}
