//! Shop entity owned by a seller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A seller's storefront
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub address: String,
    pub opening_hours: String,
    pub website: Option<String>,
    pub category: String,
    pub seller_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Validated input for shop creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShop {
    pub name: String,
    pub bio: String,
    pub address: String,
    pub opening_hours: String,
    pub website: Option<String>,
    pub category: String,
    pub seller_id: Uuid,
}

impl Shop {
    /// Builds a shop from validated input; a blank website is dropped
    pub fn new(input: NewShop) -> Self {
        let website = input.website.filter(|w| !w.trim().is_empty());
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            bio: input.bio,
            address: input.address,
            opening_hours: input.opening_hours,
            website,
            category: input.category,
            seller_id: input.seller_id,
            created_at: Utc::now(),
        }
    }
}
