use axum::{routing::get, Router};

pub mod customers;
pub mod system;

/// Router for all API-key-protected endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/reset", get(system::reset))
        .nest("/customers", customers::router())
}
