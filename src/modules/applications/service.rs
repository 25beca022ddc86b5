use jobboard_core::AppError;
use jobboard_models::{
    Application, ApplicationDetails, ApplicationStatus, CreateApplicationDto, MyApplication,
    UpdateApplicationStatusDto,
};
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::modules::job_offers::service::JobOfferService;

const APPLICATION_COLUMNS: &str =
    "id, candidate_id, job_offer_id, status, comment, cover_letter, application_date";

pub struct ApplicationService;

impl ApplicationService {
    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<Application>, AppError> {
        let application = sqlx::query_as::<_, Application>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(application)
    }

    /// The offer must exist and be active; a candidate applies at most once.
    #[instrument(skip(db, dto), fields(job_offer_id = dto.job_offer_id))]
    pub async fn apply(
        db: &PgPool,
        candidate_id: i64,
        dto: CreateApplicationDto,
    ) -> Result<Application, AppError> {
        let offer = JobOfferService::get_by_id(db, dto.job_offer_id).await?;

        if !offer.is_active() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "This job offer is no longer accepting applications"
            )));
        }

        let already_applied = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM applications WHERE candidate_id = $1 AND job_offer_id = $2",
        )
        .bind(candidate_id)
        .bind(offer.id)
        .fetch_optional(db)
        .await?
        .is_some();

        if already_applied {
            return Err(duplicate_application());
        }

        let application = sqlx::query_as::<_, Application>(&format!(
            "INSERT INTO applications (candidate_id, job_offer_id, status, cover_letter)
             VALUES ($1, $2, $3, $4)
             RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(candidate_id)
        .bind(offer.id)
        .bind(ApplicationStatus::Applied.as_str())
        .bind(&dto.cover_letter)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return duplicate_application();
            }
            AppError::from(e)
        })?;

        info!(application_id = application.id, candidate_id, "Application submitted");
        Ok(application)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_status(
        db: &PgPool,
        id: i64,
        dto: UpdateApplicationStatusDto,
    ) -> Result<Application, AppError> {
        let status = parse_status(&dto.status)?;

        let application = sqlx::query_as::<_, Application>(&format!(
            "UPDATE applications
             SET status = $1, comment = COALESCE($2, comment)
             WHERE id = $3
             RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(status.as_str())
        .bind(&dto.comment)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Application not found")))?;

        info!(application_id = id, status = %status, "Application status updated");
        Ok(application)
    }

    #[instrument(skip(db))]
    pub async fn list_for_candidate(
        db: &PgPool,
        candidate_id: i64,
    ) -> Result<Vec<MyApplication>, AppError> {
        let applications = sqlx::query_as::<_, MyApplication>(
            r#"SELECT a.id, a.job_offer_id, a.status, a.comment, a.cover_letter,
                      a.application_date, o.title, o.location
               FROM applications a
               JOIN job_offers o ON o.id = a.job_offer_id
               WHERE a.candidate_id = $1
               ORDER BY a.application_date DESC"#,
        )
        .bind(candidate_id)
        .fetch_all(db)
        .await?;

        Ok(applications)
    }

    #[instrument(skip(db))]
    pub async fn get_details(db: &PgPool, id: i64) -> Result<ApplicationDetails, AppError> {
        let details = sqlx::query_as::<_, ApplicationDetails>(
            r#"SELECT a.id, a.candidate_id, a.job_offer_id, a.status, a.comment, a.cover_letter,
                      a.application_date, o.title, o.location, o.recruiter_id,
                      u.first_name, u.last_name, u.email
               FROM applications a
               JOIN job_offers o ON o.id = a.job_offer_id
               JOIN users u ON u.id = a.candidate_id
               WHERE a.id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Application not found")))?;

        Ok(details)
    }
}

fn duplicate_application() -> AppError {
    AppError::bad_request(anyhow::anyhow!("You have already applied to this job offer"))
}

pub(crate) fn parse_status(value: &str) -> Result<ApplicationStatus, AppError> {
    value.parse().map_err(|_| {
        let valid: Vec<&str> = ApplicationStatus::ALL.iter().map(|s| s.as_str()).collect();
        AppError::bad_request(anyhow::anyhow!(
            "Invalid status. Valid statuses: {}",
            valid.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_parse_status() {
        assert_eq!(
            parse_status("Psychological Interview").unwrap(),
            ApplicationStatus::PsychologicalInterview
        );

        let err = parse_status("Hired").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.error.to_string().contains("Personal Interview"));
    }
}
