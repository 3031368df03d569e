pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::Config;

/// Read-only state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Assembles the application router.
///
/// * `POST /predict` scores a set of answers.
/// * `GET /api/questions` lists the questionnaire.
pub fn create_router(config: Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/predict", post(handlers::predict_stress))
        .route("/api/questions", get(handlers::list_questions))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
