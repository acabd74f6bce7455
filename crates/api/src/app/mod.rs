//! HTTP application wiring (axum router + service wiring).
//!
//! - `services.rs`: infrastructure wiring (the customer store behind its trait)
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use custodesk_auth::{ApiKey, StaticKeyValidator};
use custodesk_core::CustomerStore;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Every customer-data route, `/reset` included, sits behind the API-key
/// gate; only `/health` is public.
pub fn build_app(api_key: ApiKey, store: Arc<dyn CustomerStore>) -> Router {
    let auth_state = middleware::AuthState {
        validator: Arc::new(StaticKeyValidator::new(api_key)),
    };

    let services = Arc::new(services::AppServices::new(store));

    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::api_key_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new())
}
