//! HTTP layer of the Bazaar auth service
//!
//! Routes, request/response DTOs, cookie handling, JWT middleware and the
//! mapping from domain errors to HTTP responses.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::{AppState, Collaborators};
