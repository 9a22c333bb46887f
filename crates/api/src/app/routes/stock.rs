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
        .route("/", get(get_all_stock).post(create_stock))
        .route("/:id", get(get_stock_by_id).put(update_stock).delete(delete_stock))
}

pub async fn create_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Row>,
) -> axum::response::Response {
    match services.stock.create(body).await {
        Ok(row) => errors::json_ok(
            StatusCode::CREATED,
            "Stock item created successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_all_stock(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.stock.get_all().await {
        Ok(rows) => errors::json_ok(StatusCode::OK, "Stock items retrieved successfully", rows),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_stock_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Path(item_id): Path<i64>,
) -> axum::response::Response {
    match services.stock.get_by_id(item_id).await {
        Ok(row) => errors::json_ok(
            StatusCode::OK,
            "Stock item retrieved successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(item_id): Path<i64>,
    Json(body): Json<Row>,
) -> axum::response::Response {
    match services.stock.update(item_id, body).await {
        Ok(row) => errors::json_ok(
            StatusCode::OK,
            "Stock item updated successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(item_id): Path<i64>,
) -> axum::response::Response {
    match services.stock.delete(item_id).await {
        Ok(row) => errors::json_ok(
            StatusCode::OK,
            "Stock item deleted successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}
