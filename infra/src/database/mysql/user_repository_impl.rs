//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use bz_core::domain::entities::{Role, User};
use bz_core::errors::DomainError;
use bz_core::repositories::UserRepository;

use super::{parse_uuid, query_error, write_error};

const SELECT_USER: &str = r#"
    SELECT id, name, email, password, created_at, updated_at
    FROM users
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<User, sqlx::Error> {
        let id: String = row.try_get("id")?;
        Ok(User {
            id: parse_uuid("users.id", &id).map_err(|e| sqlx::Error::Decode(e.to_string().into()))?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_USER);

        sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .and_then(|row| row.as_ref().map(Self::row_to_user).transpose())
            .map_err(|e| query_error("Failed to find user by email", e))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_USER);

        sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .and_then(|row| row.as_ref().map(Self::row_to_user).transpose())
            .map_err(|e| query_error("Failed to find user by id", e))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(Role::User, "Failed to create user", e))?;

        tracing::debug!(user_id = %user.id, "User row inserted");
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET name = ?, email = ?, password = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.updated_at)
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(Role::User, "Failed to update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::internal(format!("User {} not found for update", user.id)));
        }
        Ok(user)
    }
}
