use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, routing::get, Router};
use chrono::Utc;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/pending-orders", get(get_pending_orders))
        .route("/summary", get(get_summary_metrics))
        .route("/monthly-sales", get(get_monthly_sales))
}

pub async fn get_pending_orders(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let today = Utc::now().date_naive();
    match services.analytics.pending_orders(today).await {
        Ok(orders) => errors::json_ok(
            StatusCode::OK,
            "Pending orders retrieved successfully",
            orders,
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_summary_metrics(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.analytics.summary_metrics().await {
        Ok(metrics) => errors::json_ok(
            StatusCode::OK,
            "Summary metrics retrieved successfully",
            metrics,
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_monthly_sales(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.analytics.monthly_sales().await {
        Ok(rows) => errors::json_ok(
            StatusCode::OK,
            "Monthly sales data retrieved successfully",
            rows,
        ),
        Err(err) => errors::domain_error_to_response(err),
    }
}
