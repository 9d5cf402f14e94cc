//! In-memory repositories
//!
//! Same contract as the MySQL implementations, including the unique email
//! constraint. Used by local runs without a database and by API tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use bz_core::domain::entities::{Role, Seller, Shop, User};
use bz_core::errors::{DomainError, ValidationError};
use bz_core::repositories::{SellerRepository, ShopRepository, UserRepository};

type Table<T> = Arc<RwLock<HashMap<Uuid, T>>>;

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    rows: Table<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.rows.read().await.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut rows = self.rows.write().await;
        if rows.values().any(|u| u.email == user.email) {
            return Err(ValidationError::AccountAlreadyExists { role: Role::User }.into());
        }
        rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&user.id) {
            Some(row) => *row = user.clone(),
            None => return Err(DomainError::internal(format!("User {} not found for update", user.id))),
        }
        Ok(user)
    }
}

#[derive(Clone, Default)]
pub struct InMemorySellerRepository {
    rows: Table<Seller>,
}

impl InMemorySellerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SellerRepository for InMemorySellerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, DomainError> {
        Ok(self.rows.read().await.values().find(|s| s.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Seller>, DomainError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn create(&self, seller: Seller) -> Result<Seller, DomainError> {
        let mut rows = self.rows.write().await;
        if rows.values().any(|s| s.email == seller.email) {
            return Err(ValidationError::AccountAlreadyExists { role: Role::Seller }.into());
        }
        rows.insert(seller.id, seller.clone());
        Ok(seller)
    }

    async fn update(&self, seller: Seller) -> Result<Seller, DomainError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&seller.id) {
            Some(row) => *row = seller.clone(),
            None => {
                return Err(DomainError::internal(format!(
                    "Seller {} not found for update",
                    seller.id
                )))
            }
        }
        Ok(seller)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryShopRepository {
    rows: Table<Shop>,
}

impl InMemoryShopRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShopRepository for InMemoryShopRepository {
    async fn create(&self, shop: Shop) -> Result<Shop, DomainError> {
        self.rows.write().await.insert(shop.id, shop.clone());
        Ok(shop)
    }

    async fn find_by_seller_id(&self, seller_id: Uuid) -> Result<Option<Shop>, DomainError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|s| s.seller_id == seller_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("Asha".into(), "asha@example.com".into(), "h".into()))
            .await
            .unwrap();

        let err = repo
            .create(User::new("Other".into(), "asha@example.com".into(), "h".into()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "User already exists with this email");
    }

    #[tokio::test]
    async fn test_update_requires_existing_row() {
        let repo = InMemorySellerRepository::new();
        let seller = Seller::new(
            "Raj".into(),
            "raj@shop.com".into(),
            "+911234567890".into(),
            "IN".into(),
            "h".into(),
        );
        assert!(repo.update(seller.clone()).await.is_err());

        repo.create(seller.clone()).await.unwrap();
        let mut changed = seller;
        changed.link_vendor("vendor-1".into());
        repo.update(changed).await.unwrap();

        let stored = repo.find_by_email("raj@shop.com").await.unwrap().unwrap();
        assert_eq!(stored.cashfree_vendor_id.as_deref(), Some("vendor-1"));
    }
}
