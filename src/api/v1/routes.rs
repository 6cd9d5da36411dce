/*
 * Responsibility
 * - URL structure of v1
 * - Public: /users, /users/login
 * - Protected (access middleware via route_layer): /accounts, /transfers
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::auth::access;
use crate::state::AppState;

use crate::api::v1::handlers::{
    accounts::{create_account, get_account, list_accounts},
    transfers::create_transfer,
    users::{create_user, login_user},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/users", post(create_user))
        .route("/users/login", post(login_user));

    let protected = Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route("/accounts/{id}", get(get_account))
        .route("/transfers", post(create_transfer));

    public.merge(access::apply(protected, state))
}
