use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{
    apply_to_job_offer, get_application, get_my_applications, update_application_status,
};

pub fn init_applications_router() -> Router<AppState> {
    Router::new()
        .route("/", post(apply_to_job_offer))
        .route("/my-applications", get(get_my_applications))
        .route("/{id}", get(get_application))
        .route("/{id}/status", put(update_application_status))
}
