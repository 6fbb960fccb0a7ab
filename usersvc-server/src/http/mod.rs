//! HTTP server layer
//!
//! Axum server with:
//! - Users resource under `/users`
//! - CORS (localhost only by default)
//! - Request tracing and timeouts
//! - Swagger UI at `/docs`
//! - Plain-text error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
pub use openapi::{openapi_json, ApiDoc};
