use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} empty/not found")]
    MissingField(&'static str),

    #[error("Filter empty/not found")]
    MissingFilter,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Order data not completed/invalid")]
    InvalidBody(#[from] JsonRejection),

    #[error("{0}")]
    Forbidden(String),

    #[error("Order not found")]
    NotFound,

    #[error("No data updated")]
    NoMatch,

    #[error("Database error")]
    Store(#[from] sea_orm::DbErr),

    #[error("Account service unavailable")]
    Upstream(#[from] reqwest::Error),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField(_)
            | AppError::MissingFilter
            | AppError::BadRequest(_)
            | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            // account service down or replying garbage: 502, not the generic 500
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound
            | AppError::NoMatch
            | AppError::Store(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            AppError::Store(err) => err.to_string(),
            AppError::Upstream(err) => err.to_string(),
            AppError::InvalidBody(rejection) => rejection.body_text(),
            AppError::Internal(err) => err.to_string(),
            other => other.to_string(),
        };
        if status.is_server_error() {
            tracing::error!(status = %status, error = %detail, "request failed");
        }

        let body = ApiResponse {
            message: self.to_string(),
            data: Some(ErrorData { error: detail }),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
