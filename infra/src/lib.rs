//! # Infrastructure Layer
//!
//! Concrete adapters for the ports declared in `bz_core`:
//! - **Database**: MySQL repositories using SQLx, plus in-memory repositories
//! - **Cache**: Redis-backed and in-memory key-value stores for OTP state
//! - **Mail**: SMTP delivery through lettre, and a logging mock
//! - **Payment**: Cashfree Easy Split vendor gateway over reqwest

use std::sync::Arc;

use bz_core::repositories::{SellerRepository, ShopRepository, UserRepository};
use bz_core::services::{KeyValueStore, MailSender, VendorGateway};
use bz_shared::config::AppConfig;

pub mod cache;
pub mod database;
pub mod mail;
pub mod payment;

use database::mysql::{MySqlSellerRepository, MySqlShopRepository, MySqlUserRepository};
use database::DatabasePool;
use payment::CashfreeGateway;

/// Adapters wired from configuration, ready to hand to the core services
#[derive(Clone)]
pub struct InfrastructureServices {
    pub database: DatabasePool,
    pub users: Arc<dyn UserRepository>,
    pub sellers: Arc<dyn SellerRepository>,
    pub shops: Arc<dyn ShopRepository>,
    pub store: Arc<dyn KeyValueStore>,
    pub mailer: Arc<dyn MailSender>,
    pub vendors: Arc<dyn VendorGateway>,
}

/// Connect the database and cache, and build the mail and payment clients
pub async fn initialize(config: &AppConfig) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!(environment = %config.environment, "Initializing infrastructure services");

    let database = DatabasePool::new(config.database.clone()).await?;
    if config.database.auto_migrate {
        database.ensure_schema().await?;
    }
    let pool = database.get_pool().clone();

    let store = cache::create_store(&config.cache).await?;
    let mailer = mail::create_mail_sender(&config.mail)?;
    let vendors: Arc<dyn VendorGateway> = Arc::new(CashfreeGateway::new(config.payment.clone())?);

    tracing::info!("Infrastructure services initialized successfully");

    Ok(InfrastructureServices {
        database,
        users: Arc::new(MySqlUserRepository::new(pool.clone())),
        sellers: Arc::new(MySqlSellerRepository::new(pool.clone())),
        shops: Arc::new(MySqlShopRepository::new(pool)),
        store,
        mailer,
        vendors,
    })
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Mail transport or message construction error
    #[error("Mail error: {0}")]
    Mail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
