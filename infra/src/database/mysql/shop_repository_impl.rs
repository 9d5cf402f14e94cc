//! MySQL implementation of the ShopRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use bz_core::domain::entities::Shop;
use bz_core::errors::DomainError;
use bz_core::repositories::ShopRepository;

use super::{parse_uuid, query_error};

pub struct MySqlShopRepository {
    pool: MySqlPool,
}

impl MySqlShopRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_shop(row: &MySqlRow) -> Result<Shop, sqlx::Error> {
        let decode = |column: &str, value: String| {
            parse_uuid(column, &value).map_err(|e| sqlx::Error::Decode(e.to_string().into()))
        };
        Ok(Shop {
            id: decode("shops.id", row.try_get("id")?)?,
            name: row.try_get("name")?,
            bio: row.try_get("bio")?,
            address: row.try_get("address")?,
            opening_hours: row.try_get("opening_hours")?,
            website: row.try_get("website")?,
            category: row.try_get("category")?,
            seller_id: decode("shops.seller_id", row.try_get("seller_id")?)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        })
    }
}

#[async_trait]
impl ShopRepository for MySqlShopRepository {
    async fn create(&self, shop: Shop) -> Result<Shop, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO shops (
                id, name, bio, address, opening_hours, website,
                category, seller_id, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(shop.id.to_string())
        .bind(&shop.name)
        .bind(&shop.bio)
        .bind(&shop.address)
        .bind(&shop.opening_hours)
        .bind(&shop.website)
        .bind(&shop.category)
        .bind(shop.seller_id.to_string())
        .bind(shop.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("Failed to create shop", e))?;

        Ok(shop)
    }

    async fn find_by_seller_id(&self, seller_id: Uuid) -> Result<Option<Shop>, DomainError> {
        sqlx::query(
            r#"
            SELECT id, name, bio, address, opening_hours, website,
                   category, seller_id, created_at
            FROM shops
            WHERE seller_id = ?
            LIMIT 1
            "#,
        )
        .bind(seller_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .and_then(|row| row.as_ref().map(Self::row_to_shop).transpose())
        .map_err(|e| query_error("Failed to find shop by seller", e))
    }
}
