//! Mock implementation of ShopRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Shop;
use crate::errors::DomainError;

use super::ShopRepository;

#[derive(Clone, Default)]
pub struct MockShopRepository {
    shops: Arc<RwLock<Vec<Shop>>>,
}

impl MockShopRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<Shop> {
        self.shops.read().await.clone()
    }
}

#[async_trait]
impl ShopRepository for MockShopRepository {
    async fn create(&self, shop: Shop) -> Result<Shop, DomainError> {
        self.shops.write().await.push(shop.clone());
        Ok(shop)
    }

    async fn find_by_seller_id(&self, seller_id: Uuid) -> Result<Option<Shop>, DomainError> {
        let shops = self.shops.read().await;
        Ok(shops.iter().find(|s| s.seller_id == seller_id).cloned())
    }
}
