use dotenv::dotenv;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

mod api;
mod config;
mod error;
mod models;
mod repositories;
mod services;
mod utils;

use crate::config::{Config, StorageBackend};
use crate::repositories::{InMemoryTransactionStore, MongoTransactionStore, TransactionStore};
use crate::services::database;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    info!("Starting transaction query service");
    let config = Arc::new(Config::from_env()?);

    let (store, client) = match config.storage {
        StorageBackend::Mongo => {
            info!("Connecting to MongoDB...");
            let client = database::connect_to_database(&config).await?;
            let store: Arc<dyn TransactionStore> = Arc::new(MongoTransactionStore::new(
                &client.database(&config.db_name),
                &config.collection_name,
            ));
            (store, Some(client))
        }
        StorageBackend::Memory => {
            info!("Using in-memory transaction store");
            let store: Arc<dyn TransactionStore> = Arc::new(InMemoryTransactionStore::new());
            (store, None)
        }
    };

    let app = api::build_router(api::AppState::new(Arc::clone(&config), store));
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    if let Some(client) = client {
        database::close_database(client).await;
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Could not listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Could not listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
