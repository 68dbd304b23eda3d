//! # Account Handlers
//!
//! Registration and login. Registration stores an Argon2 hash of the
//! password and never echoes it back; login answers with a signed identity
//! token that protected endpoints verify on every request.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use officehours_core::{
    errors::BookingError,
    models::user::{LoginRequest, LoginResponse, RegisterRequest, Role, UserResponse},
};

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    // Reject unrecognized roles before touching the database
    let role: Role = payload.role.parse()?;

    // Usernames are unique; a second registration is a validation failure
    let existing = officehours_db::repositories::user::get_user_by_username(
        &state.db_pool,
        &payload.username,
    )
    .await
    .map_err(BookingError::Database)?;

    if existing.is_some() {
        return Err(AppError(BookingError::Validation(format!(
            "Username '{}' is already taken",
            payload.username
        ))));
    }

    let password_hash = auth::hash_password(&payload.password)?;

    let db_user = officehours_db::repositories::user::create_user(
        &state.db_pool,
        &payload.username,
        &password_hash,
        role.as_str(),
    )
    .await
    .map_err(BookingError::Database)?;

    // The stored hash is deliberately absent from the response
    let response = UserResponse {
        id: db_user.id,
        username: db_user.username,
        role,
        created_at: db_user.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let db_user = officehours_db::repositories::user::get_user_by_username(
        &state.db_pool,
        &payload.username,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::NotFound(format!("User '{}' not found", payload.username))
    })?;

    let is_valid = auth::verify_password(&payload.password, &db_user.password_hash)?;
    if !is_valid {
        return Err(AppError(BookingError::Authentication(
            "Invalid password".to_string(),
        )));
    }

    let role: Role = db_user.role.parse()?;
    let token = auth::issue_token(&state.jwt_secret, state.token_ttl_seconds, db_user.id, role)?;

    Ok(Json(LoginResponse { token }))
}
