//! Mock implementation of SellerRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Seller;
use crate::errors::DomainError;

use super::SellerRepository;

#[derive(Clone, Default)]
pub struct MockSellerRepository {
    sellers: Arc<RwLock<HashMap<Uuid, Seller>>>,
}

impl MockSellerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, seller: Seller) {
        self.sellers.write().await.insert(seller.id, seller);
    }

    pub async fn get(&self, id: Uuid) -> Option<Seller> {
        self.sellers.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl SellerRepository for MockSellerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, DomainError> {
        let sellers = self.sellers.read().await;
        Ok(sellers.values().find(|s| s.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Seller>, DomainError> {
        Ok(self.sellers.read().await.get(&id).cloned())
    }

    async fn create(&self, seller: Seller) -> Result<Seller, DomainError> {
        let mut sellers = self.sellers.write().await;
        if sellers.values().any(|s| s.email == seller.email) {
            return Err(DomainError::internal("duplicate email"));
        }
        sellers.insert(seller.id, seller.clone());
        Ok(seller)
    }

    async fn update(&self, seller: Seller) -> Result<Seller, DomainError> {
        let mut sellers = self.sellers.write().await;
        if !sellers.contains_key(&seller.id) {
            return Err(DomainError::internal("seller not found"));
        }
        sellers.insert(seller.id, seller.clone());
        Ok(seller)
    }
}
