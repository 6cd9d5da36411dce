/*
 * Responsibility
 * - POST /transfers (behind the access middleware)
 * - Both accounts must exist in the requested currency; the source must be the caller's
 * - Balance movement itself is atomic in transfer_repo::transfer_tx
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::transfers::{CreateTransferRequest, TransferTxResponse},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    repos::{
        MemoryDb,
        account_repo::{self, AccountRow},
        transfer_repo,
    },
    state::AppState,
};

pub async fn create_transfer(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Json(req): Json<CreateTransferRequest>,
) -> Result<(StatusCode, Json<TransferTxResponse>), AppError> {
    req.validate().map_err(AppError::invalid_request)?;

    let from = valid_account(&state.db, req.from_account_id, &req.currency).await?;
    if from.owner != auth.subject() {
        return Err(AppError::Unauthorized(
            "from account doesn't belong to the authenticated user",
        ));
    }
    valid_account(&state.db, req.to_account_id, &req.currency).await?;

    let result = transfer_repo::transfer_tx(
        &state.db,
        req.from_account_id,
        req.to_account_id,
        req.amount,
    )
    .await?;

    tracing::info!(
        transfer_id = result.transfer.id,
        from = req.from_account_id,
        to = req.to_account_id,
        amount = req.amount,
        "transfer recorded"
    );

    Ok((StatusCode::CREATED, Json(result.into())))
}

async fn valid_account(db: &MemoryDb, id: i64, currency: &str) -> Result<AccountRow, AppError> {
    let account = account_repo::get(db, id)
        .await?
        .ok_or(AppError::not_found("account"))?;

    if account.currency != currency {
        return Err(AppError::invalid_request(format!(
            "account [{id}] currency mismatch: {} vs {currency}",
            account.currency
        )));
    }

    Ok(account)
}
