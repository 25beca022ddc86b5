use axum::extract::State;
use jobboard_auth::Principal;
use jobboard_core::{ApiResponse, AppError};
use jobboard_models::{AuthResponse, LoginRequest, RegisterRequest};
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::{AuthUser, BearerToken};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error: bool,
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = AuthResponse),
        (status = 400, description = "Email already exists or malformed body", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<ApiResponse<AuthResponse>, AppError> {
    let response = AuthService::register_user(&state.db, &state.validator, dto).await?;
    Ok(ApiResponse::created(response, "User registered successfully"))
}

/// Log in and receive a token
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse<AuthResponse>, AppError> {
    let response = AuthService::login_user(&state.db, &state.validator, dto).await?;
    Ok(ApiResponse::ok(response, "Login successful"))
}

/// Current principal
#[utoipa::path(
    get,
    path = "/api/v1/auth/user",
    responses(
        (status = 200, description = "Authenticated user", body = Principal),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(user_id = auth_user.id()))]
pub async fn get_current_user(auth_user: AuthUser) -> ApiResponse<Principal> {
    ApiResponse::ok(auth_user.0, "User retrieved successfully")
}

/// Revoke the presented token
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 200, description = "Logout successful"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Revocation could not be stored", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, token), fields(user_id = auth_user.id()))]
pub async fn logout_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    BearerToken(token): BearerToken,
) -> Result<ApiResponse<()>, AppError> {
    AuthService::logout(&state.validator, &token).await?;
    Ok(ApiResponse::message("Logout successful"))
}
