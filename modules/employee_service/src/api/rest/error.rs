//! HTTP error mapping to `{"error": "..."}` bodies

use super::dto::ErrorResponse;
use crate::contract::EmployeeError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub const INVALID_PAYLOAD: &str = "invalid request payload";
pub const INVALID_EMPLOYEE_ID: &str = "invalid employee id";
pub const INVALID_PAGE: &str = "invalid page number";
pub const INVALID_SIZE: &str = "invalid size";
pub const INVALID_PAGE_SIZE: &str = "invalid page/size";
pub const INVALID_QUERY: &str = "invalid query parameters";
pub const EMPLOYEE_NOT_FOUND: &str = "employee not found";
pub const INTERNAL_ERROR: &str = "internal server error";

/// HTTP API error: a status code plus the message placed in the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Map domain errors to HTTP errors
pub fn map_domain_error(error: EmployeeError) -> ApiError {
    match error {
        EmployeeError::NotFound { .. } => {
            ApiError::new(StatusCode::NOT_FOUND, EMPLOYEE_NOT_FOUND)
        }
        EmployeeError::Validation { message } => ApiError::bad_request(message),
        // cause already logged by the service
        EmployeeError::Internal => {
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(error: EmployeeError) -> Self {
        map_domain_error(error)
    }
}
