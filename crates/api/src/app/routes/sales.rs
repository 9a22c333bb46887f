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

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_all_sales).post(create_sale))
        .route("/:id", get(get_sale_by_id).put(update_sale).delete(delete_sale))
}

pub async fn create_sale(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Row>,
) -> axum::response::Response {
    match services.sales.create(body).await {
        Ok(row) => errors::json_ok(
            StatusCode::CREATED,
            "Sale created successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_all_sales(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.sales.get_all().await {
        Ok(rows) => errors::json_ok(StatusCode::OK, "Sales records retrieved successfully", rows),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_sale_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sale_id): Path<i64>,
) -> axum::response::Response {
    match services.sales.get_by_id(sale_id).await {
        Ok(row) => errors::json_ok(
            StatusCode::OK,
            "Sale record retrieved successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update_sale(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sale_id): Path<i64>,
    Json(body): Json<Row>,
) -> axum::response::Response {
    match services.sales.update(sale_id, body).await {
        Ok(row) => errors::json_ok(
            StatusCode::OK,
            "Sale record updated successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_sale(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sale_id): Path<i64>,
) -> axum::response::Response {
    match services.sales.delete(sale_id).await {
        Ok(row) => errors::json_ok(
            StatusCode::OK,
            "Sale record deleted successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}
