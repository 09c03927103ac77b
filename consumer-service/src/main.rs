use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use user_service_sdk::{AnonymousAuthenticationProvider, HttpRequestAdapter, UserServiceClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_url = std::env::var("USER_SERVICE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let adapter = HttpRequestAdapter::new(AnonymousAuthenticationProvider, &base_url)?;
    let client = Arc::new(UserServiceClient::new(adapter));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!("consumer-service listening on {addr}, upstream {base_url}");
    consumer_service::run(listener, client).await?;
    Ok(())
}
