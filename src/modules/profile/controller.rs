use axum::extract::{Path, State};
use jobboard_core::{ApiResponse, AppError};
use jobboard_models::{
    AcademicBackground, CreateAcademicBackgroundDto, CreateWorkExperienceDto, ProfileEntries,
    UpdateAcademicBackgroundDto, UpdateWorkExperienceDto, WorkExperience,
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::guard::{require_academic_background_owner, require_work_experience_owner};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::ProfileService;

#[utoipa::path(
    get,
    path = "/api/v1/profile/work-experience",
    responses(
        (status = 200, description = "The caller's work experience", body = ProfileEntries<WorkExperience>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Profile",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state), fields(user_id = auth_user.id()))]
pub async fn get_work_experience(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<ApiResponse<ProfileEntries<WorkExperience>>, AppError> {
    let entries = ProfileService::list_work_experience(&state.db, auth_user.id()).await?;
    Ok(ApiResponse::ok(entries.into(), "Work experience retrieved successfully"))
}

#[utoipa::path(
    post,
    path = "/api/v1/profile/work-experience",
    request_body = CreateWorkExperienceDto,
    responses(
        (status = 201, description = "Work experience added", body = WorkExperience),
        (status = 400, description = "End date before start date"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error")
    ),
    tag = "Profile",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto), fields(user_id = auth_user.id()))]
pub async fn add_work_experience(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateWorkExperienceDto>,
) -> Result<ApiResponse<WorkExperience>, AppError> {
    let entry = ProfileService::add_work_experience(&state.db, auth_user.id(), dto).await?;
    Ok(ApiResponse::created(entry, "Work experience added successfully"))
}

#[utoipa::path(
    put,
    path = "/api/v1/profile/work-experience/{id}",
    params(("id" = i64, Path, description = "Work experience ID")),
    request_body = UpdateWorkExperienceDto,
    responses(
        (status = 200, description = "Work experience updated", body = WorkExperience),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Work experience not found")
    ),
    tag = "Profile",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto), fields(user_id = auth_user.id()))]
pub async fn update_work_experience(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateWorkExperienceDto>,
) -> Result<ApiResponse<WorkExperience>, AppError> {
    let existing = require_work_experience_owner(&state.db, id, &auth_user.0).await?;
    let entry = ProfileService::update_work_experience(&state.db, existing, dto).await?;
    Ok(ApiResponse::ok(entry, "Work experience updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/profile/work-experience/{id}",
    params(("id" = i64, Path, description = "Work experience ID")),
    responses(
        (status = 200, description = "Work experience deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Work experience not found")
    ),
    tag = "Profile",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state), fields(user_id = auth_user.id()))]
pub async fn delete_work_experience(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    require_work_experience_owner(&state.db, id, &auth_user.0).await?;
    ProfileService::delete_work_experience(&state.db, id).await?;
    Ok(ApiResponse::message("Work experience deleted successfully"))
}

#[utoipa::path(
    get,
    path = "/api/v1/profile/academic-background",
    responses(
        (status = 200, description = "The caller's academic background", body = ProfileEntries<AcademicBackground>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Profile",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state), fields(user_id = auth_user.id()))]
pub async fn get_academic_background(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<ApiResponse<ProfileEntries<AcademicBackground>>, AppError> {
    let entries = ProfileService::list_academic_background(&state.db, auth_user.id()).await?;
    Ok(ApiResponse::ok(entries.into(), "Academic background retrieved successfully"))
}

#[utoipa::path(
    post,
    path = "/api/v1/profile/academic-background",
    request_body = CreateAcademicBackgroundDto,
    responses(
        (status = 201, description = "Academic background added", body = AcademicBackground),
        (status = 400, description = "End year before start year"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error")
    ),
    tag = "Profile",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto), fields(user_id = auth_user.id()))]
pub async fn add_academic_background(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateAcademicBackgroundDto>,
) -> Result<ApiResponse<AcademicBackground>, AppError> {
    let entry = ProfileService::add_academic_background(&state.db, auth_user.id(), dto).await?;
    Ok(ApiResponse::created(entry, "Academic background added successfully"))
}

#[utoipa::path(
    put,
    path = "/api/v1/profile/academic-background/{id}",
    params(("id" = i64, Path, description = "Academic background ID")),
    request_body = UpdateAcademicBackgroundDto,
    responses(
        (status = 200, description = "Academic background updated", body = AcademicBackground),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Academic background not found")
    ),
    tag = "Profile",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto), fields(user_id = auth_user.id()))]
pub async fn update_academic_background(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateAcademicBackgroundDto>,
) -> Result<ApiResponse<AcademicBackground>, AppError> {
    let existing = require_academic_background_owner(&state.db, id, &auth_user.0).await?;
    let entry = ProfileService::update_academic_background(&state.db, existing, dto).await?;
    Ok(ApiResponse::ok(entry, "Academic background updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/profile/academic-background/{id}",
    params(("id" = i64, Path, description = "Academic background ID")),
    responses(
        (status = 200, description = "Academic background deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Academic background not found")
    ),
    tag = "Profile",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state), fields(user_id = auth_user.id()))]
pub async fn delete_academic_background(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    require_academic_background_owner(&state.db, id, &auth_user.0).await?;
    ProfileService::delete_academic_background(&state.db, id).await?;
    Ok(ApiResponse::message("Academic background deleted successfully"))
}
