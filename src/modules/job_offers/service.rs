use jobboard_core::AppError;
use jobboard_models::{
    Applicant, CreateJobOfferDto, JobOffer, JobOfferFilterParams, JobOfferStatus,
    UpdateJobOfferDto,
};
use sqlx::PgPool;
use tracing::instrument;

pub(crate) const JOB_OFFER_COLUMNS: &str = "id, title, description, location, salary, contract_type, \
     publication_date, closing_date, status, recruiter_id, created_at";

const DEFAULT_CONTRACT_TYPE: &str = "Indefinite";

pub struct JobOfferService;

impl JobOfferService {
    #[instrument(skip(db))]
    pub async fn list_active(
        db: &PgPool,
        filters: JobOfferFilterParams,
    ) -> Result<Vec<JobOffer>, AppError> {
        let offers = sqlx::query_as::<_, JobOffer>(&format!(
            "SELECT {JOB_OFFER_COLUMNS} FROM job_offers
             WHERE status = 'Active'
               AND ($1::TEXT IS NULL OR location ILIKE '%' || $1 || '%')
               AND ($2::TEXT IS NULL OR title ILIKE '%' || $2 || '%')
             ORDER BY publication_date DESC, id DESC"
        ))
        .bind(filters.location.as_deref().filter(|s| !s.trim().is_empty()))
        .bind(filters.title.as_deref().filter(|s| !s.trim().is_empty()))
        .fetch_all(db)
        .await?;

        Ok(offers)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<JobOffer>, AppError> {
        let offer = sqlx::query_as::<_, JobOffer>(&format!(
            "SELECT {JOB_OFFER_COLUMNS} FROM job_offers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(offer)
    }

    pub async fn get_by_id(db: &PgPool, id: i64) -> Result<JobOffer, AppError> {
        Self::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Job offer not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        recruiter_id: i64,
        dto: CreateJobOfferDto,
    ) -> Result<JobOffer, AppError> {
        let contract_type = dto
            .contract_type
            .unwrap_or_else(|| DEFAULT_CONTRACT_TYPE.to_string());

        let offer = sqlx::query_as::<_, JobOffer>(&format!(
            "INSERT INTO job_offers (title, description, location, salary, contract_type, closing_date, recruiter_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {JOB_OFFER_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.location)
        .bind(dto.salary)
        .bind(&contract_type)
        .bind(dto.closing_date)
        .bind(recruiter_id)
        .fetch_one(db)
        .await?;

        Ok(offer)
    }

    /// Applies the fields present in `dto` on top of `existing`.
    #[instrument(skip(db, existing, dto), fields(offer_id = existing.id))]
    pub async fn update(
        db: &PgPool,
        existing: JobOffer,
        dto: UpdateJobOfferDto,
    ) -> Result<JobOffer, AppError> {
        let offer = sqlx::query_as::<_, JobOffer>(&format!(
            "UPDATE job_offers
             SET title = $1, description = $2, location = $3, salary = $4,
                 contract_type = $5, closing_date = $6
             WHERE id = $7
             RETURNING {JOB_OFFER_COLUMNS}"
        ))
        .bind(dto.title.unwrap_or(existing.title))
        .bind(dto.description.unwrap_or(existing.description))
        .bind(dto.location.unwrap_or(existing.location))
        .bind(dto.salary.or(existing.salary))
        .bind(dto.contract_type.unwrap_or(existing.contract_type))
        .bind(dto.closing_date.or(existing.closing_date))
        .bind(existing.id)
        .fetch_one(db)
        .await?;

        Ok(offer)
    }

    #[instrument(skip(db))]
    pub async fn deactivate(db: &PgPool, id: i64) -> Result<JobOffer, AppError> {
        let offer = sqlx::query_as::<_, JobOffer>(&format!(
            "UPDATE job_offers SET status = $1 WHERE id = $2 RETURNING {JOB_OFFER_COLUMNS}"
        ))
        .bind(JobOfferStatus::Inactive.as_str())
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Job offer not found")))?;

        Ok(offer)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM job_offers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Job offer not found")));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn list_by_recruiter(db: &PgPool, recruiter_id: i64) -> Result<Vec<JobOffer>, AppError> {
        let offers = sqlx::query_as::<_, JobOffer>(&format!(
            "SELECT {JOB_OFFER_COLUMNS} FROM job_offers
             WHERE recruiter_id = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(recruiter_id)
        .fetch_all(db)
        .await?;

        Ok(offers)
    }

    #[instrument(skip(db))]
    pub async fn list_applicants(db: &PgPool, offer_id: i64) -> Result<Vec<Applicant>, AppError> {
        let applicants = sqlx::query_as::<_, Applicant>(
            r#"SELECT a.id AS application_id, a.status, a.comment, a.cover_letter,
                      a.application_date, u.id AS candidate_id, u.first_name, u.last_name, u.email
               FROM applications a
               JOIN users u ON u.id = a.candidate_id
               WHERE a.job_offer_id = $1
               ORDER BY a.application_date DESC"#,
        )
        .bind(offer_id)
        .fetch_all(db)
        .await?;

        Ok(applicants)
    }
}
