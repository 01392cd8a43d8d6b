use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Email must be a {domain} address")]
    InvalidEmail { domain: String },

    #[error("Student already registered for this activity")]
    AlreadyRegistered,

    #[error("Student is not registered for this activity")]
    NotRegistered,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Missing or invalid email query parameter")]
    MalformedQuery,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ActivityNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidEmail { .. }
            | AppError::AlreadyRegistered
            | AppError::NotRegistered
            | AppError::ActivityFull => StatusCode::BAD_REQUEST,
            AppError::MalformedQuery => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Failures that stop the server from starting or keep it from serving.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid {key} value: {reason}")]
    Config { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
