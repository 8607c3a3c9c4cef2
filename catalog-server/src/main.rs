use catalog_server::{serve, AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ServerConfig::from_env()?;
    rolling_logger::init_logger(&config.log_dir, "catalog-server")?;

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.bind_addr, e))?;

    let state = AppState::new(config);
    if let Err(e) = serve(listener, state).await {
        log::error!("{}", e);
        return Err(e);
    }
    Ok(())
}
