//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
    #[error("unknown schema set: {0} (expected iam or web)")]
    UnknownSchema(String),
}

/// Rejection returned by an [`Authorizer`](crate::auth::Authorizer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing or invalid credentials")]
    Unauthenticated,
    #[error("{0}")]
    Forbidden(String),
}

/// Failure of a single storage statement, before it is classified for the API.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("encode: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("store lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad params: {0}")]
    BadParams(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("insert failed: {0}")]
    InsertFailed(String),
    #[error("update failed: {0}")]
    UpdateFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadParams(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InsertFailed(_) | AppError::UpdateFailed(_) | AppError::DeleteFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Auth(AuthError::Unauthenticated) => StatusCode::UNAUTHORIZED,
            AppError::Auth(AuthError::Forbidden(_)) => StatusCode::FORBIDDEN,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadParams(_) => "bad_params",
            AppError::NotFound(_) => "not_found",
            AppError::InsertFailed(_) => "insert_failed",
            AppError::UpdateFailed(_) => "update_failed",
            AppError::DeleteFailed(_) => "delete_failed",
            AppError::Validation(_) => "validation_error",
            AppError::Auth(AuthError::Unauthenticated) => "unauthenticated",
            AppError::Auth(AuthError::Forbidden(_)) => "forbidden",
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };
        (self.status(), Json(body)).into_response()
    }
}
