//! Seller repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Seller;
use crate::errors::DomainError;

/// Repository trait for Seller entity persistence operations
#[async_trait]
pub trait SellerRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Seller>, DomainError>;

    async fn create(&self, seller: Seller) -> Result<Seller, DomainError>;

    /// Update an existing seller (matched by id), including its vendor id
    async fn update(&self, seller: Seller) -> Result<Seller, DomainError>;
}
