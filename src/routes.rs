// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{handlers::forum, state::AppState};

/// Assembles the main application router.
///
/// * `/` serves the rendered front page, the JSON polling payload and the
///   form submissions.
/// * `/assets` serves the browser controller and stylesheet from disk.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let origins: [HeaderValue; 2] = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(forum::index).post(forum::submit))
        .nest_service("/assets", ServeDir::new("assets"))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
