/*
 * Responsibility
 * - /accounts handlers (all behind the access middleware)
 * - Every account operation is scoped to the token subject
 */
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::accounts::{AccountResponse, CreateAccountRequest, ListAccountsQuery},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    repos::account_repo,
    state::AppState,
};

pub async fn create_account(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    req.validate().map_err(AppError::invalid_request)?;

    let row = account_repo::create(&state.db, auth.subject(), &req.currency).await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn get_account(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path(account_id): Path<i64>,
) -> Result<Json<AccountResponse>, AppError> {
    let row = account_repo::get(&state.db, account_id)
        .await?
        .ok_or(AppError::not_found("account"))?;

    if row.owner != auth.subject() {
        return Err(AppError::Unauthorized(
            "account doesn't belong to the authenticated user",
        ));
    }

    Ok(Json(row.into()))
}

pub async fn list_accounts(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Query(query): Query<ListAccountsQuery>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    query.validate().map_err(AppError::invalid_request)?;

    let (limit, offset) = query.window();
    let rows = account_repo::list_by_owner(&state.db, auth.subject(), limit, offset).await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
