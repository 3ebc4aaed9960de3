//! Wallets API endpoints.
//!
//! Handlers only unpack the request and call the service; every failure is
//! turned into a response by [`ServerError`].

use api_types::wallet::{CreateWalletDto, UpdateWalletDto, WalletDto};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{HeaderName, StatusCode},
};

use crate::{ServerError, server::ServerState};

static MESSAGE_HEADER: HeaderName = HeaderName::from_static("message");

const LIST_RETRIEVED_MSG: &str = "The list of wallets has been successfully retrieved.";
const LIST_EMPTY_MSG: &str = "There are no available wallets to view.";

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ServerError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ServerError::Generic(rejection.body_text()))
}

fn path<T>(param: Result<Path<T>, PathRejection>) -> Result<T, ServerError> {
    param
        .map(|Path(value)| value)
        .map_err(|rejection| ServerError::Generic(rejection.body_text()))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateWalletDto>, JsonRejection>,
) -> Result<(StatusCode, Json<WalletDto>), ServerError> {
    let wallet = state.wallets.create_wallet(body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(wallet)))
}

pub async fn update(
    State(state): State<ServerState>,
    payload: Result<Json<UpdateWalletDto>, JsonRejection>,
) -> Result<Json<WalletDto>, ServerError> {
    let wallet = state.wallets.update_wallet(body(payload)?).await?;
    Ok(Json(wallet))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<([(HeaderName, &'static str); 1], Json<Vec<WalletDto>>), ServerError> {
    let wallets = state.wallets.get_wallets().await?;
    let message = if wallets.is_empty() {
        LIST_EMPTY_MSG
    } else {
        LIST_RETRIEVED_MSG
    };
    Ok(([(MESSAGE_HEADER.clone(), message)], Json(wallets)))
}

pub async fn find_by_id(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<WalletDto>, ServerError> {
    let wallet = state.wallets.find_by_id(path(id)?).await?;
    Ok(Json(wallet))
}

pub async fn find_by_name(
    State(state): State<ServerState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<WalletDto>>, ServerError> {
    let wallets = state
        .wallets
        .find_all_by_name_like_ignore_case(&path(name)?)
        .await?;
    Ok(Json(wallets))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    state.wallets.delete_wallet_by_id(path(id)?).await?;
    Ok(StatusCode::OK)
}
