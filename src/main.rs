use parking_zones::{load_registry, router, AppState, Config, Session, SyncClient, ZoneRegistry};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let registry = match &config.registry_path {
        Some(path) => load_registry(path).await,
        None => ZoneRegistry::builtin(),
    };

    let client = SyncClient::new(config.endpoint.clone(), config.timeout)?;
    info!("syncing zones with {}", client.endpoint());

    let mut session = Session::new(client, registry);
    session.load().await;

    let app = router(AppState::new(session));
    let addr = config.listen_addr();

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
