use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jobboard_auth::{Principal, Role, require_role};
use jobboard_core::AppError;
use tracing::warn;

use crate::state::AppState;

/// The raw credential as sent, prefix included. Logout needs it to revoke the
/// exact token.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.trim().is_empty())
            .map(|value| BearerToken(value.to_string()))
            .ok_or_else(|| AppError::unauthorized("Authorization token required".to_string()))
    }
}

/// Any authenticated user.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl AuthUser {
    pub fn id(&self) -> i64 {
        self.0.id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(credential) = BearerToken::from_request_parts(parts, state).await?;

        let principal = state
            .validator
            .authenticate(&credential)
            .await
            .inspect_err(|e| warn!(reason = %e, path = %parts.uri.path(), "Authentication rejected"))?;

        Ok(AuthUser(principal))
    }
}

macro_rules! require_role_extractor {
    ($name:ident, $role:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub AuthUser);

        impl FromRequestParts<AppState> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = AuthUser::from_request_parts(parts, state).await?;
                require_role(&auth_user.0, $role)?;
                Ok($name(auth_user))
            }
        }
    };
}

require_role_extractor!(RequireRecruiter, Role::Recruiter);
require_role_extractor!(RequireCandidate, Role::Candidate);
