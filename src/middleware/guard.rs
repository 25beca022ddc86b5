//! Ownership checks composed from the generic guard and the PostgreSQL loaders.
//!
//! Each check loads the resource, reports `404` if it is missing and `403` if
//! the principal does not own it, and hands the loaded record back to the
//! handler.

use jobboard_auth::{
    OwnerField, Principal, require_owner_or_parent_owner, require_parent_ownership,
    require_resource_then_ownership,
};
use jobboard_core::AppError;
use jobboard_models::{AcademicBackground, Application, JobOffer, WorkExperience};
use sqlx::PgPool;

use crate::utils::loaders::PgLoader;

pub async fn require_offer_owner(
    db: &PgPool,
    offer_id: i64,
    principal: &Principal,
) -> Result<JobOffer, AppError> {
    require_resource_then_ownership(&PgLoader(db), offer_id, principal, OwnerField::RecruiterId)
        .await
}

/// Recruiter owns the offer the application was made to.
pub async fn require_application_offer_owner(
    db: &PgPool,
    application_id: i64,
    principal: &Principal,
) -> Result<Application, AppError> {
    let loader = PgLoader(db);
    require_parent_ownership::<Application, JobOffer, _, _>(
        &loader,
        &loader,
        application_id,
        |application| application.job_offer_id,
        principal,
        OwnerField::RecruiterId,
    )
    .await
}

/// The applying candidate, or the recruiter owning the offer.
pub async fn require_application_viewer(
    db: &PgPool,
    application_id: i64,
    principal: &Principal,
) -> Result<Application, AppError> {
    let loader = PgLoader(db);
    require_owner_or_parent_owner::<Application, JobOffer, _, _>(
        &loader,
        &loader,
        application_id,
        |application| application.job_offer_id,
        principal,
        OwnerField::CandidateId,
        OwnerField::RecruiterId,
    )
    .await
}

pub async fn require_work_experience_owner(
    db: &PgPool,
    id: i64,
    principal: &Principal,
) -> Result<WorkExperience, AppError> {
    require_resource_then_ownership(&PgLoader(db), id, principal, OwnerField::CandidateId).await
}

pub async fn require_academic_background_owner(
    db: &PgPool,
    id: i64,
    principal: &Principal,
) -> Result<AcademicBackground, AppError> {
    require_resource_then_ownership(&PgLoader(db), id, principal, OwnerField::CandidateId).await
}
