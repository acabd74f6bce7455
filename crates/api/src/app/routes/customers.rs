use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use custodesk_core::{Customer, CustomerId};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.customers().get_customers() {
        Ok(customers) => (StatusCode::OK, Json(customers)).into_response(),
        Err(e) => errors::data_error_to_response("GET /customers", e),
    }
}

pub async fn get_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CustomerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::text_error(StatusCode::BAD_REQUEST, "invalid customer id"),
    };
    match services.customers().get_customer_by_id(id) {
        Ok(customer) => (StatusCode::OK, Json(customer)).into_response(),
        Err(e) => errors::data_error_to_response("GET /customers/:id", e),
    }
}

pub async fn create_customer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::text_error(StatusCode::BAD_REQUEST, "missing request body");
    };
    let record = match Customer::from_body(&body) {
        Ok(record) => record,
        Err(e) => return errors::data_error_to_response("POST /customers", e),
    };
    match services.customers().add_customer(record) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => errors::data_error_to_response("POST /customers", e),
    }
}

pub async fn update_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let id: CustomerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::text_error(StatusCode::BAD_REQUEST, "invalid customer id"),
    };
    let Ok(Json(mut body)) = body else {
        return errors::text_error(StatusCode::BAD_REQUEST, "missing request body");
    };

    // Whatever `_id` the client sent is discarded; the record is rebound to
    // the path-derived id below.
    if let Some(obj) = body.as_object_mut() {
        obj.remove("_id");
    }

    let record = match Customer::from_body(&body) {
        Ok(record) => record.rebind(id),
        Err(e) => return errors::data_error_to_response("PUT /customers/:id", e),
    };
    match services.customers().update_customer(record) {
        Ok(confirmation) => (StatusCode::OK, confirmation).into_response(),
        Err(e) => errors::data_error_to_response("PUT /customers/:id", e),
    }
}

pub async fn delete_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CustomerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::text_error(StatusCode::BAD_REQUEST, "invalid customer id"),
    };
    match services.customers().delete_customer_by_id(id) {
        Ok(confirmation) => (StatusCode::OK, confirmation).into_response(),
        Err(e) => errors::data_error_to_response("DELETE /customers/:id", e),
    }
}
