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
        .route("/", get(get_all_stitching).post(create_stitching))
        .route(
            "/:id",
            get(get_stitching_by_id)
                .put(update_stitching)
                .delete(delete_stitching),
        )
}

pub async fn create_stitching(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Row>,
) -> axum::response::Response {
    match services.stitching.create(body).await {
        Ok(row) => errors::json_ok(
            StatusCode::CREATED,
            "Stitching record created successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_all_stitching(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.stitching.get_all().await {
        Ok(rows) => errors::json_ok(
            StatusCode::OK,
            "Stitching records retrieved successfully",
            rows,
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_stitching_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Path(stitching_id): Path<i64>,
) -> axum::response::Response {
    match services.stitching.get_by_id(stitching_id).await {
        Ok(row) => errors::json_ok(
            StatusCode::OK,
            "Stitching record retrieved successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update_stitching(
    Extension(services): Extension<Arc<AppServices>>,
    Path(stitching_id): Path<i64>,
    Json(body): Json<Row>,
) -> axum::response::Response {
    match services.stitching.update(stitching_id, body).await {
        Ok(row) => errors::json_ok(
            StatusCode::OK,
            "Stitching record updated successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_stitching(
    Extension(services): Extension<Arc<AppServices>>,
    Path(stitching_id): Path<i64>,
) -> axum::response::Response {
    match services.stitching.delete(stitching_id).await {
        Ok(row) => errors::json_ok(
            StatusCode::OK,
            "Stitching record deleted successfully",
            Value::Object(row),
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}
