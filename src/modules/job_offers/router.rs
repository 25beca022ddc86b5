use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{
    create_job_offer, deactivate_job_offer, delete_job_offer, get_job_offer,
    get_job_offer_applicants, get_job_offers, get_my_job_offers, update_job_offer,
};

pub fn init_job_offers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_job_offers).post(create_job_offer))
        .route("/my-offers", get(get_my_job_offers))
        .route(
            "/{id}",
            get(get_job_offer)
                .put(update_job_offer)
                .delete(delete_job_offer),
        )
        .route("/{id}/deactivate", patch(deactivate_job_offer))
        .route("/{id}/applicants", get(get_job_offer_applicants))
}
