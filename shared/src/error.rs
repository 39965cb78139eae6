use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Error kinds surfaced by the reservation core. Every business-rule
/// failure is detected before any mutation, so a returned error implies
/// no partial write happened.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    InvalidState(String),
    #[error("{0}")]
    DataIntegrity(String),
    #[error("repository error: {0}")]
    Repository(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<garde::Report> for AppError {
    fn from(report: garde::Report) -> Self {
        AppError::Validation(report.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InvalidState(_) | AppError::DataIntegrity(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
        }
        (status_code, self.to_string()).into_response()
    }
}
