use jobboard_auth::{RevocationList, TokenCodec, TokenValidator};
use jobboard_config::{CorsConfig, JwtConfig, RevocationBackend, RevocationConfig};
use jobboard_db::{DbInitError, PgPool, init_db_pool};
use tracing::info;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub validator: TokenValidator,
}

impl AppState {
    /// Wires the token validator from config. The revocation list is passed in
    /// so callers pick the backend.
    pub fn new(
        db: PgPool,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        revocations: RevocationList,
    ) -> Self {
        let validator = TokenValidator::new(TokenCodec::new(&jwt_config), revocations);

        Self {
            db,
            jwt_config,
            cors_config,
            validator,
        }
    }
}

pub fn revocation_list(config: &RevocationConfig, db: &PgPool) -> RevocationList {
    match config.backend {
        RevocationBackend::Postgres => RevocationList::postgres(db.clone()),
        RevocationBackend::Memory => {
            info!("Using in-memory revocation list; revoked tokens are forgotten on restart");
            RevocationList::in_memory()
        }
    }
}

pub async fn init_app_state() -> Result<AppState, DbInitError> {
    let db = init_db_pool().await?;
    let revocations = revocation_list(&RevocationConfig::from_env(), &db);

    Ok(AppState::new(
        db,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
        revocations,
    ))
}
