use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use jobboard_auth::{Principal, Role};
use jobboard_models::{
    AcademicBackground, Applicant, Application, ApplicationDetails, ApplicationStatus,
    AuthResponse, CreateAcademicBackgroundDto, CreateApplicationDto, CreateJobOfferDto,
    CreateWorkExperienceDto, JobOffer, JobOfferFilterParams, JobOfferStatus, LoginRequest,
    MyApplication, RegisterRequest, UpdateAcademicBackgroundDto, UpdateApplicationStatusDto,
    UpdateJobOfferDto, UpdateWorkExperienceDto, User, WorkExperience,
};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_current_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::job_offers::controller::get_job_offers,
        crate::modules::job_offers::controller::get_job_offer,
        crate::modules::job_offers::controller::create_job_offer,
        crate::modules::job_offers::controller::update_job_offer,
        crate::modules::job_offers::controller::deactivate_job_offer,
        crate::modules::job_offers::controller::delete_job_offer,
        crate::modules::job_offers::controller::get_my_job_offers,
        crate::modules::job_offers::controller::get_job_offer_applicants,
        crate::modules::applications::controller::apply_to_job_offer,
        crate::modules::applications::controller::update_application_status,
        crate::modules::applications::controller::get_my_applications,
        crate::modules::applications::controller::get_application,
        crate::modules::profile::controller::get_work_experience,
        crate::modules::profile::controller::add_work_experience,
        crate::modules::profile::controller::update_work_experience,
        crate::modules::profile::controller::delete_work_experience,
        crate::modules::profile::controller::get_academic_background,
        crate::modules::profile::controller::add_academic_background,
        crate::modules::profile::controller::update_academic_background,
        crate::modules::profile::controller::delete_academic_background,
    ),
    components(
        schemas(
            Principal,
            Role,
            User,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            ErrorResponse,
            JobOffer,
            JobOfferStatus,
            JobOfferFilterParams,
            CreateJobOfferDto,
            UpdateJobOfferDto,
            Applicant,
            Application,
            ApplicationStatus,
            ApplicationDetails,
            MyApplication,
            CreateApplicationDto,
            UpdateApplicationStatusDto,
            WorkExperience,
            CreateWorkExperienceDto,
            UpdateWorkExperienceDto,
            AcademicBackground,
            CreateAcademicBackgroundDto,
            UpdateAcademicBackgroundDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and logout"),
        (name = "Job Offers", description = "Job offer publishing and management"),
        (name = "Applications", description = "Candidate applications and status tracking"),
        (name = "Profile", description = "Candidate work experience and academic background")
    ),
    info(
        title = "Jobboard API",
        version = "0.1.0",
        description = "Job recruitment REST API built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_versioned_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/v1/auth/login"));
        assert!(doc.paths.paths.contains_key("/api/v1/job-offers/{id}/applicants"));
        assert!(doc.paths.paths.contains_key("/api/v1/applications/{id}/status"));
        assert!(
            doc.components
                .as_ref()
                .is_some_and(|c| c.security_schemes.contains_key("bearer_auth"))
        );
    }
}
