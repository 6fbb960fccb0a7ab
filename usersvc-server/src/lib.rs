//! usersvc-server: HTTP CRUD over an in-memory users collection
//!
//! The store sits behind the [`store::UserStore`] trait and is injected into
//! handlers through axum state, so every router owns its own data.

pub mod http;
pub mod models;
pub mod store;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use store::{MemoryUserStore, StoreError, UserStore};
