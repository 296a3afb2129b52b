pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::resume::handlers::handle_generate_section;
use crate::state::AppState;
use crate::users::handlers::handle_create_user;

pub fn build_router(state: AppState) -> Router {
    let cors_enabled = state.config.cors_enabled;

    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/users", post(handle_create_user))
        .route("/resumes/generate", post(handle_generate_section))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
