use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Restore the customer collection to its seed data.
pub async fn reset(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.customers().reset_customers() {
        Ok(confirmation) => (StatusCode::OK, confirmation).into_response(),
        Err(e) => errors::data_error_to_response("GET /reset", e),
    }
}
