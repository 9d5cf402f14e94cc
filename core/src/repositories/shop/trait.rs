//! Shop repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Shop;
use crate::errors::DomainError;

#[async_trait]
pub trait ShopRepository: Send + Sync {
    async fn create(&self, shop: Shop) -> Result<Shop, DomainError>;

    async fn find_by_seller_id(&self, seller_id: Uuid) -> Result<Option<Shop>, DomainError>;
}
