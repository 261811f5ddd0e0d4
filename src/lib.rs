//! # todofile
//!
//! A minimal todo service backed by a single JSON file.
//!
//! ## Core Concepts
//!
//! - **FileStore**: sole authority over the persisted collection; every
//!   mutation is a whole-file read-modify-write
//! - **API**: a thin Axum layer mapping store outcomes to HTTP responses
//!
//! ## Example
//!
//! ```ignore
//! use todofile::{FileStore, TodoDraft};
//!
//! let store = FileStore::at("./data/todos.json");
//!
//! let todo = store.create(TodoDraft::titled("Buy milk"))?;
//! assert_eq!(todo.id.0, 1);
//! assert!(!todo.completed);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

// Re-exports
pub use api::{build_router, ApiError, AppState};
pub use config::ServerConfig;
pub use error::{Result, StoreError};
pub use store::{FileStore, StoreConfig};
pub use types::{Todo, TodoDraft, TodoId, TodoPatch};
