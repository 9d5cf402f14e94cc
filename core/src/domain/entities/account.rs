//! Either kind of authenticated account.

use serde::Serialize;
use uuid::Uuid;

use super::{Role, Seller, User};

/// An authenticated principal loaded from a verified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Account {
    User(User),
    Seller(Seller),
}

impl Account {
    pub fn id(&self) -> Uuid {
        match self {
            Account::User(user) => user.id,
            Account::Seller(seller) => seller.id,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Account::User(_) => Role::User,
            Account::Seller(_) => Role::Seller,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Account::User(user) => &user.email,
            Account::Seller(seller) => &seller.email,
        }
    }
}
