//! smartnest HTTP presentation layer
//!
//! Thin axum handlers over the application services: decode the request,
//! construct value objects once at the edge, delegate to exactly one
//! service call, and map the result to a status and body.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
