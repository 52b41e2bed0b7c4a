use agendaeventos::clock::SystemClock;
use agendaeventos::config::env_loader::load_config;
use agendaeventos::events::registry::EventRegistry;
use agendaeventos::tracing::{setup_tracing, shutdown_tracing};
use agendaeventos::web::routes::build_router;
use agendaeventos::web::state::AppState;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let loki = setup_tracing().await;
    let config = load_config();

    let registry = EventRegistry::seeded(SystemClock);
    info!("Loaded {} events", registry.list_all().len());

    let app = build_router(AppState::new(registry));

    let listener = TcpListener::bind(config.server.to_string())
        .await
        .unwrap_or_else(|err| panic!("Failed binding to {}: {}", config.server, err));

    info!("Listening on http://{}", config.server);

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", err);
    }

    info!("Shutting down");

    shutdown_tracing(loki).await;
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed listening for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
