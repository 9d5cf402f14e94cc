//! User entity representing a registered shopper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A shopper account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,

    /// bcrypt hash; `None` for accounts created without a password
    #[serde(skip_serializing)]
    pub password: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with an already hashed password
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password: Some(password_hash),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the password hash
    pub fn set_password(&mut self, password_hash: String) {
        self.password = Some(password_hash);
        self.updated_at = Utc::now();
    }
}
