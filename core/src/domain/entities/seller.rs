//! Seller entity representing a merchant account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A merchant account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,

    #[serde(skip_serializing)]
    pub password: String,

    /// Vendor id assigned by the payment provider
    pub cashfree_vendor_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Seller {
    /// Creates a new seller with an already hashed password
    pub fn new(
        name: String,
        email: String,
        phone_number: String,
        country: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone_number,
            country,
            password: password_hash,
            cashfree_vendor_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the password hash
    pub fn set_password(&mut self, password_hash: String) {
        self.password = password_hash;
        self.updated_at = Utc::now();
    }

    /// Records the payment provider vendor id
    pub fn link_vendor(&mut self, vendor_id: String) {
        self.cashfree_vendor_id = Some(vendor_id);
        self.updated_at = Utc::now();
    }

    pub fn is_vendor(&self) -> bool {
        self.cashfree_vendor_id.is_some()
    }
}
