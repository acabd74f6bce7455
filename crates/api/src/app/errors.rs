use axum::http::StatusCode;
use axum::response::IntoResponse;

use custodesk_core::DataError;

/// Map a store error to an HTTP response.
///
/// `Storage` details are logged server-side and never leak to the client;
/// the other variants carry client-safe messages.
pub fn data_error_to_response(context: &'static str, err: DataError) -> axum::response::Response {
    match err {
        DataError::NotFound => text_error(StatusCode::NOT_FOUND, err.to_string()),
        DataError::Rejected(msg) => text_error(StatusCode::BAD_REQUEST, msg),
        DataError::Storage(msg) => {
            tracing::error!(context, error = %msg, "customer store failure");
            text_error(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

/// Plain-text error response (this API reports failures as text, not JSON).
pub fn text_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, message.into()).into_response()
}
