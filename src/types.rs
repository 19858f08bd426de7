// Error taxonomy shared across the request pipeline

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid search input: {0}")]
    Validation(String),

    #[error("Not authenticated. Go to /auth first.")]
    AuthRequired,

    #[error("Failed to authenticate: {0}")]
    AuthFailure(String),

    #[error("Upstream search failed: {0}")]
    Upstream(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::AuthRequired => StatusCode::UNAUTHORIZED,
            AppError::AuthFailure(_) | AppError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(_) | AppError::AuthRequired => {
                tracing::warn!(error = %self, "request rejected");
            }
            AppError::AuthFailure(_) | AppError::Upstream(_) => {
                tracing::error!(error = %self, "upstream call failed");
            }
        }

        // Upstream details stay in the logs; the client gets a generic body.
        let body = match &self {
            AppError::Validation(_) => self.to_string(),
            AppError::AuthRequired => self.to_string(),
            AppError::AuthFailure(_) => "Failed to authenticate".to_string(),
            AppError::Upstream(_) => "Error fetching or parsing patent data".to_string(),
        };

        (self.status_code(), body).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
