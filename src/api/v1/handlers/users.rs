/*
 * Responsibility
 * - POST /users (sign up) and POST /users/login (issue access token)
 * - DTO validation -> password service -> repo / token maker
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::dto::users::{CreateUserRequest, LoginUserRequest, LoginUserResponse, UserResponse},
    error::AppError,
    repos::user_repo::{self, NewUser},
    services::password,
    state::AppState,
};

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    req.validate().map_err(AppError::invalid_request)?;

    let hashed_password = password::hash_password(&req.password).map_err(|e| {
        tracing::error!(error = %e, "password hashing failed");
        AppError::Internal
    })?;

    let row = user_repo::create(
        &state.db,
        NewUser {
            username: &req.username,
            hashed_password: &hashed_password,
            full_name: &req.full_name,
            email: &req.email,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn login_user(
    State(state): State<AppState>,
    Json(req): Json<LoginUserRequest>,
) -> Result<Json<LoginUserResponse>, AppError> {
    req.validate().map_err(AppError::invalid_request)?;

    let user = user_repo::get(&state.db, &req.username)
        .await?
        .ok_or(AppError::not_found("user"))?;

    let matches = password::verify_password(&req.password, &user.hashed_password).map_err(|e| {
        tracing::error!(error = %e, username = %user.username, "stored password hash unreadable");
        AppError::Internal
    })?;
    if !matches {
        return Err(AppError::Unauthorized("incorrect password"));
    }

    let access_token = state
        .tokens
        .create_token(&user.username, state.access_token_ttl)?;

    Ok(Json(LoginUserResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.access_token_ttl.num_seconds(),
        user: user.into(),
    }))
}
