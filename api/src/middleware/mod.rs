//! Request middleware

pub mod auth;
pub mod cors;

pub use auth::{AuthenticatedAccount, JwtAuth};
pub use cors::create_cors;
