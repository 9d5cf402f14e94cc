//! Response bodies

use serde::Serialize;

use bz_core::domain::entities::{Account, Seller, Shop};
use bz_core::domain::value_objects::AccountSummary;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct UserLoginResponse {
    pub message: String,
    pub user: AccountSummary,
}

#[derive(Debug, Serialize)]
pub struct SellerLoginResponse {
    pub message: String,
    pub seller: AccountSummary,
}

#[derive(Debug, Serialize)]
pub struct SellerRegisteredResponse {
    pub seller: Seller,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoggedInUserResponse {
    pub success: bool,
    pub user: Account,
}

#[derive(Debug, Serialize)]
pub struct LoggedInSellerResponse {
    pub success: bool,
    pub seller: Seller,
}

#[derive(Debug, Serialize)]
pub struct ShopCreatedResponse {
    pub shop: Shop,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct VendorCreatedResponse {
    pub success: bool,
    pub vendor: serde_json::Value,
    pub message: String,
}
