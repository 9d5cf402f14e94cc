//! MySQL implementation of the SellerRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use bz_core::domain::entities::{Role, Seller};
use bz_core::errors::DomainError;
use bz_core::repositories::SellerRepository;

use super::{parse_uuid, query_error, write_error};

const SELECT_SELLER: &str = r#"
    SELECT id, name, email, phone_number, country, password,
           cashfree_vendor_id, created_at, updated_at
    FROM sellers
"#;

/// MySQL implementation of SellerRepository
pub struct MySqlSellerRepository {
    pool: MySqlPool,
}

impl MySqlSellerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_seller(row: &MySqlRow) -> Result<Seller, sqlx::Error> {
        let id: String = row.try_get("id")?;
        Ok(Seller {
            id: parse_uuid("sellers.id", &id).map_err(|e| sqlx::Error::Decode(e.to_string().into()))?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
            country: row.try_get("country")?,
            password: row.try_get("password")?,
            cashfree_vendor_id: row.try_get("cashfree_vendor_id")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
        })
    }
}

#[async_trait]
impl SellerRepository for MySqlSellerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_SELLER);

        sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .and_then(|row| row.as_ref().map(Self::row_to_seller).transpose())
            .map_err(|e| query_error("Failed to find seller by email", e))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Seller>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_SELLER);

        sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .and_then(|row| row.as_ref().map(Self::row_to_seller).transpose())
            .map_err(|e| query_error("Failed to find seller by id", e))
    }

    async fn create(&self, seller: Seller) -> Result<Seller, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sellers (
                id, name, email, phone_number, country, password,
                cashfree_vendor_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(seller.id.to_string())
        .bind(&seller.name)
        .bind(&seller.email)
        .bind(&seller.phone_number)
        .bind(&seller.country)
        .bind(&seller.password)
        .bind(&seller.cashfree_vendor_id)
        .bind(seller.created_at)
        .bind(seller.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(Role::Seller, "Failed to create seller", e))?;

        tracing::debug!(seller_id = %seller.id, "Seller row inserted");
        Ok(seller)
    }

    async fn update(&self, seller: Seller) -> Result<Seller, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE sellers SET
                name = ?, email = ?, phone_number = ?, country = ?,
                password = ?, cashfree_vendor_id = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&seller.name)
        .bind(&seller.email)
        .bind(&seller.phone_number)
        .bind(&seller.country)
        .bind(&seller.password)
        .bind(&seller.cashfree_vendor_id)
        .bind(seller.updated_at)
        .bind(seller.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(Role::Seller, "Failed to update seller", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::internal(format!("Seller {} not found for update", seller.id)));
        }
        Ok(seller)
    }
}
