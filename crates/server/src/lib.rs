use api_types::ErrorBody;
use axum::{Json, http::StatusCode, response::IntoResponse};
use store::StoreError;

pub use server::{ServerState, Variant, router, run_with_listener};

mod admin;
mod pages;
mod search;
mod server;
mod user;

pub enum ServerError {
    Store(StoreError),
    /// Debug diagnostics are on: database failures keep their detail in the
    /// response body.
    Debug(StoreError),
}

fn status_for_store_error(err: &StoreError) -> StatusCode {
    match err {
        StoreError::UserNotFound(_) => StatusCode::NOT_FOUND,
        StoreError::InvalidField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::MissingDatabase | StoreError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_store_error(err: StoreError, expose: bool) -> String {
    match err {
        StoreError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            if expose {
                db_err.to_string()
            } else {
                "internal server error".to_string()
            }
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (err, expose) = match self {
            ServerError::Store(err) => (err, false),
            ServerError::Debug(err) => (err, true),
        };
        let status = status_for_store_error(&err);
        let error = message_for_store_error(err, expose);

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
