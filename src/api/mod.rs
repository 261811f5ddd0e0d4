//! HTTP surface for the todo store.
//!
//! A thin Axum layer: handlers extract input, delegate to [`FileStore`],
//! and map outcomes to response payloads and status codes.

pub mod error;
pub mod handlers;

use crate::store::FileStore;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The todo store behind every handler.
    pub store: Arc<FileStore>,
}

/// Build the application router.
pub fn build_router(store: Arc<FileStore>) -> Router {
    let api_routes = Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/:id",
            get(handlers::get_todo)
                .patch(handlers::update_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes)
        .with_state(AppState { store })
        .layer(TraceLayer::new_for_http())
}
