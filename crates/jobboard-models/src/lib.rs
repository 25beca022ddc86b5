//! # Jobboard Models
//!
//! Database records and request/response DTOs for the Jobboard API.
//!
//! - [`users`]: accounts, registration and login
//! - [`job_offers`]: job offers and their applicants
//! - [`applications`]: applications and the status workflow
//! - [`profile`]: candidate work experience and academic background
//!
//! Records that have an owner implement [`jobboard_auth::OwnedResource`] so the
//! authorization guard can check them.

pub mod applications;
pub mod job_offers;
pub mod profile;
pub mod users;

pub use applications::{
    Application, ApplicationDetails, ApplicationStatus, CreateApplicationDto, MyApplication,
    UpdateApplicationStatusDto,
};
pub use job_offers::{
    Applicant, CreateJobOfferDto, JobOffer, JobOfferFilterParams, JobOfferStatus,
    UpdateJobOfferDto,
};
pub use profile::{
    AcademicBackground, CreateAcademicBackgroundDto, CreateWorkExperienceDto, ProfileEntries,
    UpdateAcademicBackgroundDto, UpdateWorkExperienceDto, WorkExperience, check_period,
};
pub use users::{AuthResponse, LoginRequest, RegisterRequest, User};

/// A stored enum column held a value outside its known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
