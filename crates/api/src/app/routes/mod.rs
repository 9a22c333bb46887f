use axum::{routing::get, Router};

pub mod analytics;
pub mod billing;
pub mod sales;
pub mod stitching;
pub mod stock;
pub mod system;

/// Router for all endpoints.
///
/// Axum matches trailing slashes exactly, so the collection endpoints are
/// registered under both `/stock` (nested `/`) and `/stock/` (alias below);
/// clients of the original backend use the trailing-slash form.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::home))
        .route("/health", get(system::health))
        .nest("/stock", stock::router())
        .nest("/sales", sales::router())
        .nest("/stitching", stitching::router())
        .nest("/billing", billing::router())
        .nest("/analytics", analytics::router())
        .route("/stock/", get(stock::get_all_stock).post(stock::create_stock))
        .route("/sales/", get(sales::get_all_sales).post(sales::create_sale))
        .route(
            "/stitching/",
            get(stitching::get_all_stitching).post(stitching::create_stitching),
        )
        .route(
            "/billing/",
            get(billing::get_all_bills).post(billing::create_bill),
        )
}
