// src/bin/api_server.rs

use social_feed::infra::config;
use social_feed::transport;
use social_feed::Store;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // --- Store Initialization ---
    let database_url = config::database_url();
    tracing::info!(%database_url, "opening store");
    let store = Store::connect(&database_url, config::database_max_connections()).await?;
    store.init_schema().await?;
    tracing::info!("schema ready");

    // --- API Server Initialization ---
    let app_state = transport::http::AppState::new(store.clone());
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(transport::http::cors_layer());

    let addr = config::bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received, closing store");
            store.pool().close().await;
        }
    }

    Ok(())
}
