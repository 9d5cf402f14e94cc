//! Key-value stores for OTP state
//!
//! Redis is the production backend. The in-memory store keeps the same
//! expiry semantics inside one process and is meant for local runs and tests.

pub mod memory_store;
pub mod redis_client;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use bz_core::services::KeyValueStore;
use bz_shared::config::{CacheBackend, CacheConfig};

use crate::InfrastructureError;

pub use memory_store::InMemoryStore;
pub use redis_client::RedisClient;

/// Build the store selected by `config.backend`
pub async fn create_store(config: &CacheConfig) -> Result<Arc<dyn KeyValueStore>, InfrastructureError> {
    match config.backend {
        CacheBackend::Redis => Ok(Arc::new(RedisClient::new(config.clone()).await?)),
        CacheBackend::Memory => {
            tracing::warn!("Using in-memory OTP store; state is lost on restart and not shared between instances");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}
