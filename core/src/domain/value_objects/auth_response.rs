//! Login result returned to the presentation layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Role, Seller, TokenPair, User};

/// Public fields of an account echoed back after login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&User> for AccountSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

impl From<&Seller> for AccountSummary {
    fn from(seller: &Seller) -> Self {
        Self {
            id: seller.id,
            email: seller.email.clone(),
            name: seller.name.clone(),
        }
    }
}

/// Authentication response containing tokens and the account summary
///
/// The tokens are placed in cookies by the HTTP layer and never serialized
/// into a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub role: Role,
    pub tokens: TokenPair,
    pub account: AccountSummary,
}

impl AuthResponse {
    pub fn new(role: Role, tokens: TokenPair, account: AccountSummary) -> Self {
        Self {
            role,
            tokens,
            account,
        }
    }
}
