//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and schema bootstrap
//! - MySQL repository implementations
//! - In-memory repositories for local runs and tests

pub mod connection;
pub mod memory;
pub mod mysql;

pub use connection::{DatabasePool, PoolStatistics};
pub use memory::{InMemorySellerRepository, InMemoryShopRepository, InMemoryUserRepository};
pub use mysql::{MySqlSellerRepository, MySqlShopRepository, MySqlUserRepository};
