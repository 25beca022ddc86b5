//! Success envelope shared by every endpoint.
//!
//! Successful responses are wrapped as `{ "success": true, "data": ..., "message": ... }`.
//! Errors use the matching shape produced by [`crate::AppError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, data, message)
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::CREATED, data, message)
    }

    pub fn with_status(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
            status,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl ApiResponse<()> {
    /// Envelope with `data: null`.
    pub fn message(message: impl Into<String>) -> Self {
        Self::ok((), message)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_serialize() {
        let response = ApiResponse::ok(vec![1, 2, 3], "Job offers retrieved successfully");
        let serialized = serde_json::to_value(&response).unwrap();

        assert_eq!(serialized["success"], true);
        assert_eq!(serialized["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(serialized["message"], "Job offers retrieved successfully");
        assert!(serialized.get("status").is_none());
    }

    #[test]
    fn test_message_only_envelope_has_null_data() {
        let response = ApiResponse::message("Logout successful");
        let serialized = serde_json::to_value(&response).unwrap();

        assert!(serialized["data"].is_null());
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_created_status() {
        let response = ApiResponse::created("x", "created");
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
