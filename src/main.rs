use std::env;

use anyhow::Context;
use dotenvy::dotenv;
use jobboard::logging::init_tracing;
use jobboard::router::init_router;
use jobboard::state::init_app_state;
use jobboard_db::run_migrations;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing().context("Failed to initialize logging")?;

    let state = init_app_state().await?;
    run_migrations(&state.db).await?;

    let app = init_router(state);

    let addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
