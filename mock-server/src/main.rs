use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let initial = match std::env::var("INITIAL_NUMBER") {
        Ok(raw) => raw.parse::<i64>().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("INITIAL_NUMBER: {e}"))
        })?,
        Err(_) => 0,
    };
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, initial, "listening");
    mock_server::run(listener, initial).await
}
