use axum::Json;
use axum::extract::State;
use fraudlens_core::dashboard::DashboardSnapshot;
use fraudlens_core::models::prediction::PredictionResult;

use crate::controller;
use crate::state::AppState;

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(controller::snapshot(&state).await)
}

/// Results labelled fraudulent, newest first.
pub async fn get_flagged(State(state): State<AppState>) -> Json<Vec<PredictionResult>> {
    Json(state.dashboard.lock().await.flagged())
}
