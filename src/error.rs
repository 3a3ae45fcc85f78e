use anyhow::{anyhow, Error};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

/// Errors raised when untrusted pagination input is turned into domain values.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PaginationError {
    #[error("page {page} is outside 1..={total_pages}")]
    InvalidRange { page: u32, total_pages: u32 },

    #[error("window size {0} must be an odd number between 5 and {}", crate::window::MAX_WINDOW_SIZE)]
    InvalidWindowSize(u32),

    #[error("items per page must be greater than zero")]
    ZeroItemsPerPage,

    #[error("'{0}' is not a page number")]
    InvalidJumpInput(String),
}

#[derive(Debug)]
pub struct AppError((Option<StatusCode>, Error));

impl AppError {
    pub fn status<E: Into<anyhow::Error>>(status: StatusCode, err: E) -> Self {
        Self((Some(status), err.into()))
    }

    pub fn bad_request<E: Into<anyhow::Error>>(err: E) -> Self {
        Self::status(StatusCode::BAD_REQUEST, err)
    }

    pub fn not_found() -> Self {
        Self::status(StatusCode::NOT_FOUND, anyhow!("Not Found"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.0 .0.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            format!("{}", self.0 .1),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self((None, err.into()))
    }
}
