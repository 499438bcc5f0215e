//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use rolodex_domain::error::RolodexError;

/// Maps [`RolodexError`] to an HTTP response with the appropriate status.
pub struct ApiError(RolodexError);

impl From<RolodexError> for ApiError {
    fn from(err: RolodexError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            // Not-found responses carry an empty body, not a JSON envelope.
            RolodexError::NotFound(err) => {
                tracing::debug!(error = %err, "lookup missed");
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}
