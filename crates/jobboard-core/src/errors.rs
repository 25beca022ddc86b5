//! Application error types with HTTP response conversion.
//!
//! [`AppError`] pairs an HTTP status with an [`anyhow::Error`]. Anything that
//! converts into `anyhow::Error` can be propagated with `?`; the conversion
//! recognises the authentication and authorization taxonomy below and picks
//! the matching status instead of a blanket 500.
//!
//! - [`AuthError`]: the credential could not be turned into a principal (401)
//! - [`AccessError`]: the principal may not touch the resource (403/404)

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message returned for every credential rejection. The specific reason is
/// logged but never sent to the client.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// Reasons a credential is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("malformed token")]
    Malformed,
    #[error("invalid token signature")]
    Invalid,
    #[error("token expired")]
    Expired,
    #[error("token revoked")]
    Revoked,
    #[error("revocation store failure: {0}")]
    Store(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Authorization failures raised once a principal is known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
}

impl AccessError {
    pub fn forbidden(message: impl Into<String>) -> Self {
        AccessError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AccessError::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AccessError::Forbidden(_) => StatusCode::FORBIDDEN,
            AccessError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn internal_error(message: String) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, anyhow::anyhow!(message))
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized(message: String) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!(message))
    }

    pub fn forbidden(message: String) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow::anyhow!(message))
    }

    /// Message sent to the client. Credential failures collapse into one
    /// generic message.
    pub fn public_message(&self) -> String {
        match self.error.downcast_ref::<AuthError>() {
            Some(AuthError::Store(_)) => "Internal server error".to_string(),
            Some(_) => INVALID_TOKEN_MESSAGE.to_string(),
            None => self.error.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = %self.error, "Request failed");
        }

        let body = Json(json!({
            "success": false,
            "data": null,
            "message": self.public_message(),
            "error": true
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        let error = err.into();

        let status = if let Some(auth) = error.downcast_ref::<AuthError>() {
            auth.status()
        } else if let Some(access) = error.downcast_ref::<AccessError>() {
            access.status()
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        Self { status, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn raise_auth(err: AuthError) -> Result<(), AppError> {
        Err(err)?
    }

    fn raise_access(err: AccessError) -> Result<(), AppError> {
        Err(err)?
    }

    #[test]
    fn test_auth_errors_map_to_unauthorized() {
        for kind in [
            AuthError::Malformed,
            AuthError::Invalid,
            AuthError::Expired,
            AuthError::Revoked,
        ] {
            let err = raise_auth(kind).unwrap_err();
            assert_eq!(err.status, StatusCode::UNAUTHORIZED);
            assert_eq!(err.public_message(), INVALID_TOKEN_MESSAGE);
        }
    }

    #[test]
    fn test_store_failure_is_internal() {
        let err = raise_auth(AuthError::Store("disk full".to_string())).unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.public_message().contains("disk full"));
    }

    #[test]
    fn test_access_errors_keep_their_status() {
        let err = raise_access(AccessError::forbidden("not yours")).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.public_message(), "not yours");

        let err = raise_access(AccessError::not_found("Job offer not found")).unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unknown_errors_are_internal() {
        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = AppError::bad_request(anyhow::anyhow!("Invalid status")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "Invalid status");
        assert!(body["data"].is_null());
    }
}
