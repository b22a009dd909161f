// Binary entry point: read settings, seed the catalog, serve HTTP.

use anyhow::Context;
use event_hub::config::Settings;
use event_hub::modules::events::adapters::outbound::event_repository_in_memory::InMemoryEventRepository;
use event_hub::modules::events::adapters::outbound::seed::demo_catalog;
use event_hub::shared::core::clock::{Clock, SystemClock};
use event_hub::shared::infrastructure::navigation::logging::TracingNavigator;
use event_hub::shell::http::router;
use event_hub::shell::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "event_hub=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env().context("invalid configuration")?;

    let clock = Arc::new(SystemClock);

    let events = if settings.seed_catalog {
        let catalog = demo_catalog(clock.today()).context("failed to build the demo catalog")?;
        tracing::info!(events = catalog.len(), "catalog seeded");
        InMemoryEventRepository::with_events(catalog).context("demo catalog is inconsistent")?
    } else {
        InMemoryEventRepository::new()
    };

    let state = AppState::build(
        events,
        clock,
        Arc::new(TracingNavigator),
        settings.settle_delay,
    );

    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    tracing::info!(
        addr = %settings.bind_addr,
        settle_delay = ?settings.settle_delay,
        "listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
