use jobboard_core::AppError;
use jobboard_models::{
    AcademicBackground, CreateAcademicBackgroundDto, CreateWorkExperienceDto,
    UpdateAcademicBackgroundDto, UpdateWorkExperienceDto, WorkExperience, check_period,
};
use sqlx::PgPool;
use tracing::instrument;

const WORK_EXPERIENCE_COLUMNS: &str =
    "id, candidate_id, company, position, start_date, end_date, description";

const ACADEMIC_BACKGROUND_COLUMNS: &str =
    "id, candidate_id, institution, degree, field_of_study, start_year, end_year";

fn ensure_period<T: PartialOrd>(start: Option<&T>, end: Option<&T>) -> Result<(), AppError> {
    if check_period(start, end) {
        Ok(())
    } else {
        Err(AppError::bad_request(anyhow::anyhow!(
            "End date cannot be before start date"
        )))
    }
}

pub struct ProfileService;

impl ProfileService {
    #[instrument(skip(db))]
    pub async fn find_work_experience(
        db: &PgPool,
        id: i64,
    ) -> Result<Option<WorkExperience>, AppError> {
        let entry = sqlx::query_as::<_, WorkExperience>(&format!(
            "SELECT {WORK_EXPERIENCE_COLUMNS} FROM work_experiences WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(entry)
    }

    #[instrument(skip(db))]
    pub async fn list_work_experience(
        db: &PgPool,
        candidate_id: i64,
    ) -> Result<Vec<WorkExperience>, AppError> {
        let entries = sqlx::query_as::<_, WorkExperience>(&format!(
            "SELECT {WORK_EXPERIENCE_COLUMNS} FROM work_experiences
             WHERE candidate_id = $1
             ORDER BY start_date DESC"
        ))
        .bind(candidate_id)
        .fetch_all(db)
        .await?;

        Ok(entries)
    }

    #[instrument(skip(db, dto))]
    pub async fn add_work_experience(
        db: &PgPool,
        candidate_id: i64,
        dto: CreateWorkExperienceDto,
    ) -> Result<WorkExperience, AppError> {
        ensure_period(Some(&dto.start_date), dto.end_date.as_ref())?;

        let entry = sqlx::query_as::<_, WorkExperience>(&format!(
            "INSERT INTO work_experiences (candidate_id, company, position, start_date, end_date, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {WORK_EXPERIENCE_COLUMNS}"
        ))
        .bind(candidate_id)
        .bind(&dto.company)
        .bind(&dto.position)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .bind(&dto.description)
        .fetch_one(db)
        .await?;

        Ok(entry)
    }

    #[instrument(skip(db, existing, dto), fields(id = existing.id))]
    pub async fn update_work_experience(
        db: &PgPool,
        existing: WorkExperience,
        dto: UpdateWorkExperienceDto,
    ) -> Result<WorkExperience, AppError> {
        let start_date = dto.start_date.unwrap_or(existing.start_date);
        let end_date = dto.end_date.or(existing.end_date);
        ensure_period(Some(&start_date), end_date.as_ref())?;

        let entry = sqlx::query_as::<_, WorkExperience>(&format!(
            "UPDATE work_experiences
             SET company = $1, position = $2, start_date = $3, end_date = $4, description = $5
             WHERE id = $6
             RETURNING {WORK_EXPERIENCE_COLUMNS}"
        ))
        .bind(dto.company.unwrap_or(existing.company))
        .bind(dto.position.unwrap_or(existing.position))
        .bind(start_date)
        .bind(end_date)
        .bind(dto.description.or(existing.description))
        .bind(existing.id)
        .fetch_one(db)
        .await?;

        Ok(entry)
    }

    #[instrument(skip(db))]
    pub async fn delete_work_experience(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM work_experiences WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Work experience not found")));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn find_academic_background(
        db: &PgPool,
        id: i64,
    ) -> Result<Option<AcademicBackground>, AppError> {
        let entry = sqlx::query_as::<_, AcademicBackground>(&format!(
            "SELECT {ACADEMIC_BACKGROUND_COLUMNS} FROM academic_backgrounds WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(entry)
    }

    #[instrument(skip(db))]
    pub async fn list_academic_background(
        db: &PgPool,
        candidate_id: i64,
    ) -> Result<Vec<AcademicBackground>, AppError> {
        let entries = sqlx::query_as::<_, AcademicBackground>(&format!(
            "SELECT {ACADEMIC_BACKGROUND_COLUMNS} FROM academic_backgrounds
             WHERE candidate_id = $1
             ORDER BY start_year DESC"
        ))
        .bind(candidate_id)
        .fetch_all(db)
        .await?;

        Ok(entries)
    }

    #[instrument(skip(db, dto))]
    pub async fn add_academic_background(
        db: &PgPool,
        candidate_id: i64,
        dto: CreateAcademicBackgroundDto,
    ) -> Result<AcademicBackground, AppError> {
        ensure_period(Some(&dto.start_year), dto.end_year.as_ref())?;

        let entry = sqlx::query_as::<_, AcademicBackground>(&format!(
            "INSERT INTO academic_backgrounds (candidate_id, institution, degree, field_of_study, start_year, end_year)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ACADEMIC_BACKGROUND_COLUMNS}"
        ))
        .bind(candidate_id)
        .bind(&dto.institution)
        .bind(&dto.degree)
        .bind(&dto.field_of_study)
        .bind(dto.start_year)
        .bind(dto.end_year)
        .fetch_one(db)
        .await?;

        Ok(entry)
    }

    #[instrument(skip(db, existing, dto), fields(id = existing.id))]
    pub async fn update_academic_background(
        db: &PgPool,
        existing: AcademicBackground,
        dto: UpdateAcademicBackgroundDto,
    ) -> Result<AcademicBackground, AppError> {
        let start_year = dto.start_year.unwrap_or(existing.start_year);
        let end_year = dto.end_year.or(existing.end_year);
        ensure_period(Some(&start_year), end_year.as_ref())?;

        let entry = sqlx::query_as::<_, AcademicBackground>(&format!(
            "UPDATE academic_backgrounds
             SET institution = $1, degree = $2, field_of_study = $3, start_year = $4, end_year = $5
             WHERE id = $6
             RETURNING {ACADEMIC_BACKGROUND_COLUMNS}"
        ))
        .bind(dto.institution.unwrap_or(existing.institution))
        .bind(dto.degree.unwrap_or(existing.degree))
        .bind(dto.field_of_study.or(existing.field_of_study))
        .bind(start_year)
        .bind(end_year)
        .bind(existing.id)
        .fetch_one(db)
        .await?;

        Ok(entry)
    }

    #[instrument(skip(db))]
    pub async fn delete_academic_background(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM academic_backgrounds WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Academic background not found"
            )));
        }

        Ok(())
    }
}
