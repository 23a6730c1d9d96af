//! HTTP API Layer
//!
//! This crate provides the REST API for quote rating using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for quotes and health checks
//! - **Middleware**: Request IDs, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses with per-field details
//!
//! # Routes
//!
//! ```text
//! POST   /api/quotes                 create a quote
//! GET    /api/quotes                 list quotes
//! GET    /api/quotes/:id             fetch a quote
//! DELETE /api/quotes/:id             delete a quote
//! GET    /api/checkout-quote?quote=  price a quote by quote number
//! GET    /health, /health/ready      liveness and readiness
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{build_service, create_router};
//!
//! let service = build_service(store, &config)?;
//! let app = create_router(Arc::new(service), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use domain_quote::{QuoteIdAllocator, QuoteService, QuoteStore, RateTable, RateTableError};

use crate::config::ApiConfig;
use crate::handlers::{health, quote};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QuoteService>,
    pub config: ApiConfig,
}

/// Assembles the quote service from configuration
///
/// # Errors
///
/// Returns an error if `rate_table_path` is set but the file cannot be loaded.
pub fn build_service(
    store: Arc<dyn QuoteStore>,
    config: &ApiConfig,
) -> Result<QuoteService, RateTableError> {
    let rates = match &config.rate_table_path {
        Some(path) => {
            info!(path = %path.display(), "Loading rate table");
            RateTable::load(path)?
        }
        None => RateTable::standard().clone(),
    };

    Ok(QuoteService::new(store)
        .with_rates(Arc::new(rates))
        .with_allocator(QuoteIdAllocator::new(config.quote_id_max_attempts)))
}

/// Creates the main API router
pub fn create_router(service: Arc<QuoteService>, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let quote_routes = Router::new()
        .route("/quotes", get(quote::list_quotes).post(quote::create_quote))
        .route("/quotes/:id", get(quote::get_quote).delete(quote::delete_quote))
        .route("/checkout-quote", get(quote::checkout_quote))
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api", quote_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
