use customer_mock::{AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "customer_mock=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let app = customer_mock::router(AppState::new());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("customer-mock listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
