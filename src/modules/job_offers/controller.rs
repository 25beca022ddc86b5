use axum::extract::{Path, Query, State};
use jobboard_core::{ApiResponse, AppError};
use jobboard_models::{
    Applicant, CreateJobOfferDto, JobOffer, JobOfferFilterParams, UpdateJobOfferDto,
};
use tracing::instrument;

use crate::middleware::auth::RequireRecruiter;
use crate::middleware::guard::require_offer_owner;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::JobOfferService;

#[utoipa::path(
    get,
    path = "/api/v1/job-offers",
    params(JobOfferFilterParams),
    responses(
        (status = 200, description = "Active job offers", body = Vec<JobOffer>)
    ),
    tag = "Job Offers"
)]
#[instrument(skip(state))]
pub async fn get_job_offers(
    State(state): State<AppState>,
    Query(filters): Query<JobOfferFilterParams>,
) -> Result<ApiResponse<Vec<JobOffer>>, AppError> {
    let offers = JobOfferService::list_active(&state.db, filters).await?;
    Ok(ApiResponse::ok(offers, "Job offers retrieved successfully"))
}

#[utoipa::path(
    get,
    path = "/api/v1/job-offers/{id}",
    params(("id" = i64, Path, description = "Job offer ID")),
    responses(
        (status = 200, description = "Job offer", body = JobOffer),
        (status = 404, description = "Job offer not found")
    ),
    tag = "Job Offers"
)]
#[instrument(skip(state))]
pub async fn get_job_offer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<JobOffer>, AppError> {
    let offer = JobOfferService::get_by_id(&state.db, id).await?;
    Ok(ApiResponse::ok(offer, "Job offer retrieved successfully"))
}

#[utoipa::path(
    post,
    path = "/api/v1/job-offers",
    request_body = CreateJobOfferDto,
    responses(
        (status = 201, description = "Job offer created", body = JobOffer),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires the Recruiter role"),
        (status = 422, description = "Validation error")
    ),
    tag = "Job Offers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto), fields(user_id = auth_user.id()))]
pub async fn create_job_offer(
    State(state): State<AppState>,
    RequireRecruiter(auth_user): RequireRecruiter,
    ValidatedJson(dto): ValidatedJson<CreateJobOfferDto>,
) -> Result<ApiResponse<JobOffer>, AppError> {
    let offer = JobOfferService::create(&state.db, auth_user.id(), dto).await?;
    Ok(ApiResponse::created(offer, "Job offer created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/v1/job-offers/{id}",
    params(("id" = i64, Path, description = "Job offer ID")),
    request_body = UpdateJobOfferDto,
    responses(
        (status = 200, description = "Job offer updated", body = JobOffer),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a recruiter or not the owner"),
        (status = 404, description = "Job offer not found")
    ),
    tag = "Job Offers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto), fields(user_id = auth_user.id()))]
pub async fn update_job_offer(
    State(state): State<AppState>,
    RequireRecruiter(auth_user): RequireRecruiter,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateJobOfferDto>,
) -> Result<ApiResponse<JobOffer>, AppError> {
    let existing = require_offer_owner(&state.db, id, &auth_user.0).await?;
    let offer = JobOfferService::update(&state.db, existing, dto).await?;
    Ok(ApiResponse::ok(offer, "Job offer updated successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/v1/job-offers/{id}/deactivate",
    params(("id" = i64, Path, description = "Job offer ID")),
    responses(
        (status = 200, description = "Job offer deactivated", body = JobOffer),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a recruiter or not the owner"),
        (status = 404, description = "Job offer not found")
    ),
    tag = "Job Offers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state), fields(user_id = auth_user.id()))]
pub async fn deactivate_job_offer(
    State(state): State<AppState>,
    RequireRecruiter(auth_user): RequireRecruiter,
    Path(id): Path<i64>,
) -> Result<ApiResponse<JobOffer>, AppError> {
    require_offer_owner(&state.db, id, &auth_user.0).await?;
    let offer = JobOfferService::deactivate(&state.db, id).await?;
    Ok(ApiResponse::ok(offer, "Job offer deactivated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/job-offers/{id}",
    params(("id" = i64, Path, description = "Job offer ID")),
    responses(
        (status = 200, description = "Job offer deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a recruiter or not the owner"),
        (status = 404, description = "Job offer not found")
    ),
    tag = "Job Offers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state), fields(user_id = auth_user.id()))]
pub async fn delete_job_offer(
    State(state): State<AppState>,
    RequireRecruiter(auth_user): RequireRecruiter,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    require_offer_owner(&state.db, id, &auth_user.0).await?;
    JobOfferService::delete(&state.db, id).await?;
    Ok(ApiResponse::message("Job offer deleted successfully"))
}

#[utoipa::path(
    get,
    path = "/api/v1/job-offers/my-offers",
    responses(
        (status = 200, description = "Offers created by the caller", body = Vec<JobOffer>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires the Recruiter role")
    ),
    tag = "Job Offers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state), fields(user_id = auth_user.id()))]
pub async fn get_my_job_offers(
    State(state): State<AppState>,
    RequireRecruiter(auth_user): RequireRecruiter,
) -> Result<ApiResponse<Vec<JobOffer>>, AppError> {
    let offers = JobOfferService::list_by_recruiter(&state.db, auth_user.id()).await?;
    Ok(ApiResponse::ok(offers, "Job offers retrieved successfully"))
}

#[utoipa::path(
    get,
    path = "/api/v1/job-offers/{id}/applicants",
    params(("id" = i64, Path, description = "Job offer ID")),
    responses(
        (status = 200, description = "Applicants for the offer", body = Vec<Applicant>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a recruiter or not the owner"),
        (status = 404, description = "Job offer not found")
    ),
    tag = "Job Offers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state), fields(user_id = auth_user.id()))]
pub async fn get_job_offer_applicants(
    State(state): State<AppState>,
    RequireRecruiter(auth_user): RequireRecruiter,
    Path(id): Path<i64>,
) -> Result<ApiResponse<Vec<Applicant>>, AppError> {
    require_offer_owner(&state.db, id, &auth_user.0).await?;
    let applicants = JobOfferService::list_applicants(&state.db, id).await?;
    Ok(ApiResponse::ok(applicants, "Applicants retrieved successfully"))
}
