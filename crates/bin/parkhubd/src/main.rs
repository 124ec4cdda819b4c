//! # parkhubd — parkhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`parkhub.toml` plus env overrides)
//! - Initialize logging, the `SQLite` connection pool and migrations
//! - Construct repository implementations and application services
//! - Optionally seed the sample slots before serving
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use parkhub_adapter_http_axum::router;
use parkhub_adapter_http_axum::state::AppState;
use parkhub_adapter_storage_sqlite_sqlx::{Config as StorageConfig, SqliteSlotRepository};
use parkhub_app::ports::SlotRepository;
use parkhub_app::services::seed_service::{SeedOutcome, SeedService};
use parkhub_app::services::slot_service::SlotService;
use parkhub_domain::error::ParkHubError;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services
    let seed_service = SeedService::new(SqliteSlotRepository::new(pool.clone()));
    let slot_service = SlotService::new(SqliteSlotRepository::new(pool));

    if config.seed.on_startup {
        seed_on_startup(&seed_service, config.seed.force).await?;
    }

    // HTTP
    let app = router::build(AppState::new(seed_service, slot_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "parkhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("parkhubd stopped");
    Ok(())
}

async fn seed_on_startup<R: SlotRepository>(
    service: &SeedService<R>,
    force: bool,
) -> Result<(), ParkHubError> {
    match service.seed_sample_data(force).await? {
        SeedOutcome::AlreadySeeded { existing_count } => {
            tracing::info!(existing_count, "startup seed skipped, store not empty");
        }
        SeedOutcome::Seeded {
            total_slots,
            locations,
            ..
        } => {
            tracing::info!(total_slots, locations, "startup seed complete");
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
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
                tracing::warn!(%err, "failed to listen for SIGTERM");
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
