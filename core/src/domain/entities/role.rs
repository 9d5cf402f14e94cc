//! Account role carried in token claims and error messages.

use serde::{Deserialize, Serialize};

/// The two kinds of account the service authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A shopper
    User,
    /// A merchant
    Seller,
}

impl Role {
    /// Lowercase wire form used in JWT claims
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Seller => "seller",
        }
    }

    /// Capitalised form used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Seller => "Seller",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "seller" => Ok(Role::Seller),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}
