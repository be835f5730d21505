//! fraudlens-server library root.
//!
//! Exposes the router and its building blocks so integration tests can
//! drive the HTTP surface and the controller without binding a socket.

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the HTTP API.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        .route("/dashboard/flagged", get(routes::dashboard::get_flagged))
        .route("/predictions", post(routes::predictions::predict))
        .route("/predictions/batch", post(routes::predictions::predict_batch))
        .route("/assistant/questions", post(routes::assistant::ask))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
