use chrono::Utc;
use jobboard_auth::{Role, TokenValidator};
use jobboard_core::{AppError, AuthError, hash_password, verify_password};
use jobboard_models::{AuthResponse, LoginRequest, RegisterRequest, User};
use sqlx::PgPool;
use tracing::{info, instrument};

pub(crate) const USER_COLUMNS: &str =
    "id, first_name, last_name, email, password, birth_date, phone, address, role, created_at";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, validator, dto), fields(email = %dto.email))]
    pub async fn register_user(
        db: &PgPool,
        validator: &TokenValidator,
        dto: RegisterRequest,
    ) -> Result<AuthResponse, AppError> {
        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!("Email already exists")));
        }

        let hashed_password = hash_password(&dto.password)?;
        let role = dto.role.unwrap_or(Role::Candidate);

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (first_name, last_name, email, password, birth_date, phone, address, role)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(dto.birth_date)
        .bind(&dto.phone)
        .bind(&dto.address)
        .bind(role.as_str())
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!("Email already exists"));
            }
            AppError::from(e)
        })?;

        let token = validator.issue(&user.principal())?;
        info!(user_id = user.id, role = %user.role, "User registered");

        Ok(AuthResponse { token, user })
    }

    #[instrument(skip(db, validator, dto), fields(email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        validator: &TokenValidator,
        dto: LoginRequest,
    ) -> Result<AuthResponse, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid credentials".to_string()))?;

        if !verify_password(&dto.password, &user.password)? {
            return Err(AppError::unauthorized("Invalid credentials".to_string()));
        }

        let token = validator.issue(&user.principal())?;

        Ok(AuthResponse { token, user })
    }

    /// Revokes the presented token until it would have expired on its own.
    #[instrument(skip(validator, credential))]
    pub async fn logout(validator: &TokenValidator, credential: &str) -> Result<(), AppError> {
        let expires_at = validator
            .get_expiration(credential)
            .unwrap_or_else(|| Utc::now().timestamp() + validator.codec().ttl());

        validator
            .revoke(credential, expires_at)
            .await
            .map_err(AuthError::from)?;

        Ok(())
    }
}
