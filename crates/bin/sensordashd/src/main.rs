//! # sensordashd — sensordash daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise structured logging
//! - Construct the in-memory snapshot repository and snapshot bus
//! - Construct the sensor source and spawn the polling loop
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use sensordash_adapter_http_axum::router;
use sensordash_adapter_http_axum::state::AppState;
use sensordash_adapter_virtual::VirtualWeatherStation;
use sensordash_app::memory::InMemorySnapshotRepository;
use sensordash_app::services::sensor_service::SensorService;
use sensordash_app::snapshot_bus::InProcessSnapshotBus;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

const SNAPSHOT_BUS_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    for rejected in &config.rejected_overrides {
        tracing::warn!(
            key = rejected.key,
            value = %rejected.value,
            "ignoring invalid environment override"
        );
    }

    // Storage and fan-out
    let snapshots = Arc::new(InMemorySnapshotRepository::default());
    let snapshot_bus = Arc::new(InProcessSnapshotBus::new(SNAPSHOT_BUS_CAPACITY));

    // Polling
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poller = if config.sensors.virtual_enabled {
        let service = SensorService::new(
            VirtualWeatherStation::new(config.sensors.virtual_station.clone()),
            Arc::clone(&snapshots),
            Arc::clone(&snapshot_bus),
        );
        let period = config.poll_interval();
        Some(tokio::spawn(async move {
            service.run(period, shutdown_rx).await;
        }))
    } else {
        tracing::warn!("no sensor source enabled, the dashboard will only show placeholders");
        None
    };

    // HTTP
    let state = AppState::from_arcs(snapshots, snapshot_bus, config.dashboard.refresh_seconds);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "sensordashd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // receiver may already be gone when polling is disabled
    let _ = shutdown_tx.send(true);
    if let Some(poller) = poller {
        poller.await?;
    }

    tracing::info!("sensordashd stopped");
    Ok(())
}

/// Resolve once SIGINT (Ctrl-C) or, on unix, SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
