//! Candidate profile entries: work experience and academic background.

use chrono::NaiveDate;
use jobboard_auth::{OwnedResource, OwnerField};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkExperience {
    pub id: i64,
    pub candidate_id: i64,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl OwnedResource for WorkExperience {
    const KIND: &'static str = "Work experience";

    fn owner_id(&self, field: OwnerField) -> Option<i64> {
        match field {
            OwnerField::CandidateId => Some(self.candidate_id),
            OwnerField::RecruiterId => None,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkExperienceDto {
    #[validate(length(min = 1, max = 255))]
    pub company: String,
    #[validate(length(min = 1, max = 255))]
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkExperienceDto {
    #[validate(length(min = 1, max = 255))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub position: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AcademicBackground {
    pub id: i64,
    pub candidate_id: i64,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_year: i32,
    pub end_year: Option<i32>,
}

impl OwnedResource for AcademicBackground {
    const KIND: &'static str = "Academic background";

    fn owner_id(&self, field: OwnerField) -> Option<i64> {
        match field {
            OwnerField::CandidateId => Some(self.candidate_id),
            OwnerField::RecruiterId => None,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAcademicBackgroundDto {
    #[validate(length(min = 1, max = 255))]
    pub institution: String,
    #[validate(length(min = 1, max = 255))]
    pub degree: String,
    #[validate(length(max = 255))]
    pub field_of_study: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub start_year: i32,
    #[validate(range(min = 1900, max = 2100))]
    pub end_year: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAcademicBackgroundDto {
    #[validate(length(min = 1, max = 255))]
    pub institution: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub degree: Option<String>,
    #[validate(length(max = 255))]
    pub field_of_study: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub start_year: Option<i32>,
    #[validate(range(min = 1900, max = 2100))]
    pub end_year: Option<i32>,
}

/// A candidate's entries of one kind with their count.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileEntries<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for ProfileEntries<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

/// `end` must not precede `start` when both are present.
pub fn check_period<T: PartialOrd>(start: Option<&T>, end: Option<&T>) -> bool {
    match (start, end) {
        (Some(start), Some(end)) => end >= start,
        _ => true,
    }
}
