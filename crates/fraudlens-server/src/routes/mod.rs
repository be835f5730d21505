pub mod assistant;
pub mod dashboard;
pub mod health;
pub mod predictions;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::controller::ActionReport;

/// An action report with the status code its outcome maps to.
pub struct ActionResponse {
    pub status: StatusCode,
    pub report: ActionReport,
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.report)).into_response()
    }
}
