use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures coming out of the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// the store could not be reached (pool closed or exhausted, I/O, TLS)
    #[error("product store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// the read or write itself failed, or returned something that isn't a document
    #[error("product query failed: {0}")]
    QueryFailed(String),

    #[error("invalid product document: {0}")]
    InvalidDocument(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => StoreError::Unavailable(err),
            other => StoreError::QueryFailed(other.to_string()),
        }
    }
}

/// Errors that end a request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to render page: {0}")]
    Render(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Store(StoreError::Unavailable(_)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Product store is unavailable",
            ),
            AppError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load products",
            ),
            AppError::Render(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render page",
            ),
        };

        tracing::error!(error = %self, status = status.as_u16(), "request failed");

        (status, message).into_response()
    }
}
