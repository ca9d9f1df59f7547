use anyhow::Result;
use item_gateway::Config;
use json_http_client::JsonHttpClient;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let app = item_gateway::router(JsonHttpClient::new(config.item_service_url.clone()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("gateway listening on {addr}");
    tracing::info!("forwarding to {}", config.item_service_url);

    axum::serve(listener, app).await?;
    Ok(())
}
