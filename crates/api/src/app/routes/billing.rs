use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use atelier_core::Row;

use crate::app::errors;
use crate::app::services::AppServices;

/// Bills are immutable snapshots: no update route, only create/read/delete.
pub fn router() -> Router {
    Router::new()
        .route("/", get(get_all_bills).post(create_bill))
        .route("/:id", get(get_bill_by_id).delete(delete_bill))
}

pub async fn create_bill(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Row>,
) -> axum::response::Response {
    match services.billing.create_bill(body).await {
        Ok(row) => errors::json_ok(
            StatusCode::CREATED,
            "Bill created successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_all_bills(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.billing.get_all_bills().await {
        Ok(rows) => errors::json_ok(
            StatusCode::OK,
            "Billing records retrieved successfully",
            rows,
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_bill_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Path(bill_id): Path<i64>,
) -> axum::response::Response {
    match services.billing.get_bill_by_id(bill_id).await {
        Ok(row) => errors::json_ok(
            StatusCode::OK,
            "Bill record retrieved successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_bill(
    Extension(services): Extension<Arc<AppServices>>,
    Path(bill_id): Path<i64>,
) -> axum::response::Response {
    match services.billing.delete_bill(bill_id).await {
        Ok(row) => errors::json_ok(
            StatusCode::OK,
            "Bill record deleted successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}
