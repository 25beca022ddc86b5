//! PostgreSQL-backed [`ResourceLoader`]s for the authorization guard.

use async_trait::async_trait;
use jobboard_auth::ResourceLoader;
use jobboard_core::AppError;
use jobboard_models::{AcademicBackground, Application, JobOffer, WorkExperience};
use sqlx::PgPool;

use crate::modules::applications::service::ApplicationService;
use crate::modules::job_offers::service::JobOfferService;
use crate::modules::profile::service::ProfileService;

#[derive(Debug, Clone, Copy)]
pub struct PgLoader<'a>(pub &'a PgPool);

#[async_trait]
impl<'a> ResourceLoader<JobOffer> for PgLoader<'a> {
    async fn load(&self, id: i64) -> Result<Option<JobOffer>, AppError> {
        JobOfferService::find_by_id(self.0, id).await
    }
}

#[async_trait]
impl<'a> ResourceLoader<Application> for PgLoader<'a> {
    async fn load(&self, id: i64) -> Result<Option<Application>, AppError> {
        ApplicationService::find_by_id(self.0, id).await
    }
}

#[async_trait]
impl<'a> ResourceLoader<WorkExperience> for PgLoader<'a> {
    async fn load(&self, id: i64) -> Result<Option<WorkExperience>, AppError> {
        ProfileService::find_work_experience(self.0, id).await
    }
}

#[async_trait]
impl<'a> ResourceLoader<AcademicBackground> for PgLoader<'a> {
    async fn load(&self, id: i64) -> Result<Option<AcademicBackground>, AppError> {
        ProfileService::find_academic_background(self.0, id).await
    }
}
