use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    atelier_observability::init();

    let services = Arc::new(atelier_api::app::services::build_services());
    let app = atelier_api::app::build_app(services);

    let addr =
        std::env::var("ATELIER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
