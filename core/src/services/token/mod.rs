//! Token service module for JWT management
//!
//! Access and refresh tokens are signed with separate secrets so a leaked
//! access secret cannot mint refresh tokens.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
