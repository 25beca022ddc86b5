//! Applications and their status workflow.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use jobboard_auth::{OwnedResource, OwnerField};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ApplicationStatus {
    Applied,
    Reviewing,
    #[serde(rename = "Psychological Interview")]
    PsychologicalInterview,
    #[serde(rename = "Personal Interview")]
    PersonalInterview,
    Selected,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Reviewing,
        ApplicationStatus::PsychologicalInterview,
        ApplicationStatus::PersonalInterview,
        ApplicationStatus::Selected,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Reviewing => "Reviewing",
            ApplicationStatus::PsychologicalInterview => "Psychological Interview",
            ApplicationStatus::PersonalInterview => "Personal Interview",
            ApplicationStatus::Selected => "Selected",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("application status", s))
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Application {
    pub id: i64,
    pub candidate_id: i64,
    pub job_offer_id: i64,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub comment: Option<String>,
    pub cover_letter: Option<String>,
    pub application_date: DateTime<Utc>,
}

impl OwnedResource for Application {
    const KIND: &'static str = "Application";

    fn owner_id(&self, field: OwnerField) -> Option<i64> {
        match field {
            OwnerField::CandidateId => Some(self.candidate_id),
            OwnerField::RecruiterId => None,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateApplicationDto {
    #[validate(range(min = 1))]
    pub job_offer_id: i64,
    pub cover_letter: Option<String>,
}

/// `status` is checked against [`ApplicationStatus`] by the service so an
/// unknown value is a 400 rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateApplicationStatusDto {
    #[validate(length(min = 1))]
    pub status: String,
    pub comment: Option<String>,
}

/// One of the caller's applications with the offer it targets.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MyApplication {
    pub id: i64,
    pub job_offer_id: i64,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub comment: Option<String>,
    pub cover_letter: Option<String>,
    pub application_date: DateTime<Utc>,
    pub title: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ApplicationDetails {
    pub id: i64,
    pub candidate_id: i64,
    pub job_offer_id: i64,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub comment: Option<String>,
    pub cover_letter: Option<String>,
    pub application_date: DateTime<Utc>,
    pub title: String,
    pub location: String,
    pub recruiter_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        for status in ApplicationStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<ApplicationStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = "Hired".parse::<ApplicationStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown application status: Hired");
        assert!("psychological interview".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_application_owner_fields() {
        let application = Application {
            id: 7,
            candidate_id: 42,
            job_offer_id: 5,
            status: ApplicationStatus::Applied,
            comment: None,
            cover_letter: None,
            application_date: Utc::now(),
        };

        assert_eq!(application.owner_id(OwnerField::CandidateId), Some(42));
        assert_eq!(application.owner_id(OwnerField::RecruiterId), None);
    }

    #[test]
    fn test_create_application_dto_validation() {
        let dto = CreateApplicationDto {
            job_offer_id: 0,
            cover_letter: None,
        };
        assert!(dto.validate().is_err());
    }
}
