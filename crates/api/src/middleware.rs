use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use custodesk_auth::{CredentialError, CredentialValidator};

/// Name of the credential header clients must send on protected routes.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct AuthState {
    pub validator: Arc<dyn CredentialValidator>,
}

/// API-key gate applied in front of every customer-data route.
///
/// Missing credential → 401, wrong credential → 403; a matching credential
/// forwards the request unchanged. Rejection is terminal and has no side
/// effects beyond the response.
pub async fn api_key_middleware(
    State(state): State<AuthState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    let presented = extract_api_key(req.headers());

    state.validator.validate(presented).map_err(|e| match e {
        CredentialError::Missing => (StatusCode::UNAUTHORIZED, "API Key is missing"),
        CredentialError::Invalid => (StatusCode::FORBIDDEN, "API Key is invalid"),
    })?;

    Ok(next.run(req).await)
}

fn extract_api_key(headers: &HeaderMap) -> Option<&str> {
    // A header that is present but not valid UTF-8 cannot match any secret;
    // treat it as a wrong credential rather than a missing one.
    headers
        .get(API_KEY_HEADER)
        .map(|value| value.to_str().unwrap_or(""))
}
