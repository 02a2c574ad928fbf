//! Maps service errors onto HTTP responses.

use crate::error::ServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;

/// A failed request: the service error plus the fixed message shown to the
/// caller when the server is at fault.
#[derive(Debug)]
pub struct ApiError {
    context: &'static str,
    error: ServiceError,
}

impl ApiError {
    pub fn new(context: &'static str, error: ServiceError) -> Self {
        Self { context, error }
    }

    pub fn status(&self) -> StatusCode {
        if self.error.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}: {}", self.context, self.error);
            (status, self.context).into_response()
        } else {
            (status, self.error.to_string()).into_response()
        }
    }
}

/// Attaches the caller-facing message to a service result.
pub trait Context<T> {
    fn context(self, context: &'static str) -> Result<T, ApiError>;
}

impl<T> Context<T> for Result<T, ServiceError> {
    fn context(self, context: &'static str) -> Result<T, ApiError> {
        self.map_err(|error| ApiError::new(context, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn client_errors_are_bad_requests() {
        let err = ApiError::new(
            "Error fetching statistics",
            ServiceError::InvalidMonth("Foo".to_string()),
        );

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn server_errors_hide_details() {
        let result: Result<(), ServiceError> =
            Err(StoreError::Other("connection reset".to_string()).into());

        let err = result.context("Error fetching statistics").unwrap_err();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
