use api_types::error::{ErrorBody, FieldErrorView};
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::{EngineError, ErrorCode};

pub use server::{ServerState, router, run_with_listener, spawn_with_listener};

mod server;
mod wallets;

pub mod types {
    pub mod wallet {
        pub use api_types::wallet::{CreateWalletDto, UpdateWalletDto, WalletDto};
    }

    pub mod error {
        pub use api_types::error::{ErrorBody, FieldErrorView};
    }
}

/// Every failure a handler can return.
///
/// This is the single place where errors become HTTP responses: handlers
/// only propagate them with `?`.
#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// Malformed request that never reached the engine.
    Generic(String),
}

pub(crate) fn status_for_code(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::W001 | ErrorCode::TEA003 => StatusCode::BAD_REQUEST,
        ErrorCode::W003 => StatusCode::NOT_FOUND,
        ErrorCode::TEA001 => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn body_for_engine_error(err: EngineError) -> ErrorBody {
    let code = err.code();
    match err {
        EngineError::Validation(errors) => ErrorBody {
            code: code.to_string(),
            error: code.business_message().to_string(),
            fields: errors
                .errors
                .into_iter()
                .map(|e| FieldErrorView {
                    field: e.field.to_string(),
                    message: e.message,
                })
                .collect(),
        },
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            ErrorBody {
                code: code.to_string(),
                error: code.business_message().to_string(),
                fields: Vec::new(),
            }
        }
        other => ErrorBody {
            code: code.to_string(),
            error: other.to_string(),
            fields: Vec::new(),
        },
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ServerError::Engine(err) => (status_for_code(err.code()), body_for_engine_error(err)),
            ServerError::Generic(error) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: ErrorCode::W001.to_string(),
                    error,
                    fields: Vec::new(),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
