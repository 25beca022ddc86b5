use axum::extract::{Path, State};
use jobboard_core::{ApiResponse, AppError};
use jobboard_models::{
    Application, ApplicationDetails, CreateApplicationDto, MyApplication,
    UpdateApplicationStatusDto,
};
use tracing::instrument;

use crate::middleware::auth::{AuthUser, RequireCandidate, RequireRecruiter};
use crate::middleware::guard::{require_application_offer_owner, require_application_viewer};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::ApplicationService;

#[utoipa::path(
    post,
    path = "/api/v1/applications",
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = Application),
        (status = 400, description = "Offer inactive or already applied"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires the Candidate role"),
        (status = 404, description = "Job offer not found")
    ),
    tag = "Applications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto), fields(user_id = auth_user.id()))]
pub async fn apply_to_job_offer(
    State(state): State<AppState>,
    RequireCandidate(auth_user): RequireCandidate,
    ValidatedJson(dto): ValidatedJson<CreateApplicationDto>,
) -> Result<ApiResponse<Application>, AppError> {
    let application = ApplicationService::apply(&state.db, auth_user.id(), dto).await?;
    Ok(ApiResponse::created(application, "Application submitted successfully"))
}

#[utoipa::path(
    put,
    path = "/api/v1/applications/{id}/status",
    params(("id" = i64, Path, description = "Application ID")),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Status updated", body = Application),
        (status = 400, description = "Invalid status"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a recruiter or not the owner of the job offer"),
        (status = 404, description = "Application not found")
    ),
    tag = "Applications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto), fields(user_id = auth_user.id()))]
pub async fn update_application_status(
    State(state): State<AppState>,
    RequireRecruiter(auth_user): RequireRecruiter,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateApplicationStatusDto>,
) -> Result<ApiResponse<Application>, AppError> {
    require_application_offer_owner(&state.db, id, &auth_user.0).await?;
    let application = ApplicationService::update_status(&state.db, id, dto).await?;
    Ok(ApiResponse::ok(application, "Application status updated successfully"))
}

#[utoipa::path(
    get,
    path = "/api/v1/applications/my-applications",
    responses(
        (status = 200, description = "The caller's applications", body = Vec<MyApplication>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires the Candidate role")
    ),
    tag = "Applications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state), fields(user_id = auth_user.id()))]
pub async fn get_my_applications(
    State(state): State<AppState>,
    RequireCandidate(auth_user): RequireCandidate,
) -> Result<ApiResponse<Vec<MyApplication>>, AppError> {
    let applications = ApplicationService::list_for_candidate(&state.db, auth_user.id()).await?;
    Ok(ApiResponse::ok(applications, "Applications retrieved successfully"))
}

#[utoipa::path(
    get,
    path = "/api/v1/applications/{id}",
    params(("id" = i64, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application details", body = ApplicationDetails),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Neither the applicant nor the offer's recruiter"),
        (status = 404, description = "Application not found")
    ),
    tag = "Applications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state), fields(user_id = auth_user.id()))]
pub async fn get_application(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i64>,
) -> Result<ApiResponse<ApplicationDetails>, AppError> {
    require_application_viewer(&state.db, id, &auth_user.0).await?;
    let details = ApplicationService::get_details(&state.db, id).await?;
    Ok(ApiResponse::ok(details, "Application retrieved successfully"))
}
