//! Job offer models and DTOs.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use jobboard_auth::{OwnedResource, OwnerField};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum JobOfferStatus {
    Active,
    Inactive,
}

impl JobOfferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobOfferStatus::Active => "Active",
            JobOfferStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for JobOfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobOfferStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(JobOfferStatus::Active),
            "Inactive" => Ok(JobOfferStatus::Inactive),
            other => Err(UnknownVariant::new("job offer status", other)),
        }
    }
}

impl TryFrom<String> for JobOfferStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JobOffer {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<f64>,
    pub contract_type: String,
    pub publication_date: NaiveDate,
    pub closing_date: Option<NaiveDate>,
    #[sqlx(try_from = "String")]
    pub status: JobOfferStatus,
    pub recruiter_id: i64,
    pub created_at: DateTime<Utc>,
}

impl JobOffer {
    pub fn is_active(&self) -> bool {
        self.status == JobOfferStatus::Active
    }
}

impl OwnedResource for JobOffer {
    const KIND: &'static str = "Job offer";

    fn owner_id(&self, field: OwnerField) -> Option<i64> {
        match field {
            OwnerField::RecruiterId => Some(self.recruiter_id),
            OwnerField::CandidateId => None,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateJobOfferDto {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    #[validate(range(min = 0.0))]
    pub salary: Option<f64>,
    /// Defaults to `Indefinite`.
    #[validate(length(min = 1, max = 100))]
    pub contract_type: Option<String>,
    pub closing_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateJobOfferDto {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,
    #[validate(range(min = 0.0))]
    pub salary: Option<f64>,
    #[validate(length(min = 1, max = 100))]
    pub contract_type: Option<String>,
    pub closing_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct JobOfferFilterParams {
    /// Case-insensitive substring match on location
    pub location: Option<String>,
    /// Case-insensitive substring match on title
    pub title: Option<String>,
}

/// A candidate who applied to one of the recruiter's offers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Applicant {
    pub application_id: i64,
    pub status: String,
    pub comment: Option<String>,
    pub cover_letter: Option<String>,
    pub application_date: DateTime<Utc>,
    pub candidate_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto() -> CreateJobOfferDto {
        CreateJobOfferDto {
            title: "Backend Engineer".to_string(),
            description: "Rust and PostgreSQL".to_string(),
            location: "Madrid".to_string(),
            salary: Some(45000.0),
            contract_type: None,
            closing_date: None,
        }
    }

    #[test]
    fn test_create_job_offer_dto_validation() {
        assert!(create_dto().validate().is_ok());

        let empty_title = CreateJobOfferDto {
            title: String::new(),
            ..create_dto()
        };
        assert!(empty_title.validate().is_err());

        let negative_salary = CreateJobOfferDto {
            salary: Some(-1.0),
            ..create_dto()
        };
        assert!(negative_salary.validate().is_err());
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpdateJobOfferDto::default().validate().is_ok());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("Active".parse::<JobOfferStatus>().unwrap(), JobOfferStatus::Active);
        assert_eq!(
            JobOfferStatus::try_from("Inactive".to_string()).unwrap(),
            JobOfferStatus::Inactive
        );
        assert!("active".parse::<JobOfferStatus>().is_err());
    }

    #[test]
    fn test_owner_is_recruiter() {
        let offer = JobOffer {
            id: 5,
            title: "Backend Engineer".to_string(),
            description: String::new(),
            location: "Madrid".to_string(),
            salary: None,
            contract_type: "Indefinite".to_string(),
            publication_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            closing_date: None,
            status: JobOfferStatus::Active,
            recruiter_id: 10,
            created_at: Utc::now(),
        };

        assert_eq!(offer.owner_id(OwnerField::RecruiterId), Some(10));
        assert_eq!(offer.owner_id(OwnerField::CandidateId), None);
        assert!(offer.is_active());
    }
}
