//! HTTP surface: axum router + endpoints for the chat flow, results
//! view, appointments, dashboards, and health check.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use types::ApiContext;
