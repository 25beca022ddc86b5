use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{
    add_academic_background, add_work_experience, delete_academic_background,
    delete_work_experience, get_academic_background, get_work_experience,
    update_academic_background, update_work_experience,
};

pub fn init_profile_router() -> Router<AppState> {
    Router::new()
        .route(
            "/work-experience",
            get(get_work_experience).post(add_work_experience),
        )
        .route(
            "/work-experience/{id}",
            put(update_work_experience).delete(delete_work_experience),
        )
        .route(
            "/academic-background",
            get(get_academic_background).post(add_academic_background),
        )
        .route(
            "/academic-background/{id}",
            put(update_academic_background).delete(delete_academic_background),
        )
}
