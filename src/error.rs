use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Errors surfaced to HTTP callers. Both map to 401; the service has no
/// other failure mode of its own.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Username/password pair did not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authorization header absent or not a usable bearer scheme.
    #[error("Not authenticated")]
    NotAuthenticated,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        (StatusCode::UNAUTHORIZED, Json(ErrorResponse { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_not_authenticated_message() {
        assert_eq!(ApiError::NotAuthenticated.to_string(), "Not authenticated");
    }
}
