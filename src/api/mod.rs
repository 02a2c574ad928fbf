//! HTTP surface of the service.

pub mod endpoints;
mod error;
mod handlers;
mod logging;
mod params;

use crate::config::Config;
use crate::repositories::TransactionStore;
use crate::services::{SeedService, TransactionService};
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub transactions: Arc<TransactionService>,
    pub seeder: Arc<SeedService>,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: Arc<dyn TransactionStore>) -> Self {
        let seeder = SeedService::new(
            Arc::clone(&store),
            config.seed_source.clone(),
            config.seed_replace,
        );
        Self {
            transactions: Arc::new(TransactionService::new(store)),
            seeder: Arc::new(seeder),
            config,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::INITIALIZE,
            get(handlers::initialize_database).post(handlers::initialize_database),
        )
        .route(endpoints::TRANSACTIONS, get(handlers::list_transactions))
        .route(endpoints::STATISTICS, get(handlers::get_statistics))
        .route(endpoints::BAR_CHART, get(handlers::get_bar_chart_data))
        .route(endpoints::PIE_CHART, get(handlers::get_pie_chart_data))
        .layer(middleware::from_fn(logging::log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
