use std::error::Error;

use tokio::net::TcpListener;

use mergington_activities::adapters::connect_activity_store;
use mergington_activities::adapters::http::{app_router, ActivitiesAppState};
use mergington_activities::application::SeedActivitiesHandler;
use mergington_activities::config::AppConfig;
use mergington_activities::ports::ActivityStore;
use mergington_activities::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.server)?;

    let store = connect_activity_store(&config.database).await?;

    // Seed before the listener binds so the first request sees the catalog.
    SeedActivitiesHandler::new(store.clone()).handle().await?;

    let app = app_router(
        ActivitiesAppState::new(store.clone()),
        &config.server.static_dir,
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
