//! HTTP API Layer
//!
//! This crate provides the REST API for the expense splitting system using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for groups, expenses, and settlement
//! - **Middleware**: Request logging and tracing
//! - **DTOs**: Request/Response data transfer objects with validation
//! - **Error Handling**: Consistent error responses
//!
//! The handlers talk to storage only through the `GroupStore` port, so the
//! same router serves PostgreSQL in production and an in-memory store in
//! tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(store, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_group::GroupStore;

use crate::config::ApiConfig;
use crate::handlers::{expense, group, health, settlement};
use crate::middleware::request_log;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GroupStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Storage adapter behind the group port
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: Arc<dyn GroupStore>, config: ApiConfig) -> Router {
    let state = AppState { store, config };

    // Public routes (no group code required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Group routes; everything below a group is reached via its share code
    let group_routes = Router::new()
        .route("/", post(group::create_group))
        .route("/:code", get(group::get_group))
        .route("/:code/members", post(group::add_member))
        .route("/:code/expenses", get(expense::list_expenses))
        .route("/:code/expenses", post(expense::add_expense))
        .route("/:code/settlement", get(settlement::get_settlement));

    let api_routes = Router::new()
        .nest("/groups", group_routes)
        .layer(axum_middleware::from_fn(request_log));

    // The browser client is served from a different origin, so CORS stays
    // permissive, matching the deployment this replaces.
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
