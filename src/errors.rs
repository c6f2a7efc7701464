use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("profile '{0}' not found")]
    NotFound(String),
    #[error("days per week must be between 0 and 5, got {0}")]
    InvalidPolicy(u8),
    #[error("'{0}' is not a YYYY-MM-DD date")]
    InvalidDate(String),
    #[error("'{0}' is not a YYYY-MM month")]
    InvalidMonth(String),
    #[error("profile name must not be empty")]
    EmptyName,
    #[error("invalid profile import: {0}")]
    InvalidImport(String),
    #[error("invalid share link: {0}")]
    InvalidShareLink(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound(_) => Self::not_found(err.to_string()),
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
