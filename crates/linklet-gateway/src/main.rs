use clap::Parser;
use linklet_core::SystemClock;
use linklet_gateway::cli::CLI;
use linklet_gateway::{logging, App, AppState};
use linklet_shortener::ShortenerSettings;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    let cli = CLI::parse();

    let _guard = logging::init(cli.log_file().as_deref(), &cli.log_filter)?;

    let settings = ShortenerSettings::builder()
        .default_validity_minutes(cli.default_validity_minutes)
        .max_generation_attempts(cli.max_generation_attempts)
        .build();
    let geo = linklet_geo::from_database_path(cli.geoip_db.as_deref());
    let state = AppState::in_memory(settings, geo, Arc::new(SystemClock), cli.base_url());

    let listener = tokio::net::TcpListener::bind((cli.host, cli.port)).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        base_url = cli.base_url().as_deref().unwrap_or("<request host>"),
        "server_started"
    );

    axum::serve(
        listener,
        App::router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
