//! Request and payload types for seller onboarding

use serde::{Deserialize, Serialize};

use crate::domain::entities::Seller;

#[derive(Debug, Clone, Default)]
pub struct CreateShopRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
    pub website: Option<String>,
    pub category: Option<String>,
    pub seller_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateVendorRequest {
    pub seller_id: Option<String>,
    pub bank: Option<BankDetails>,
    pub kyc_details: Option<KycDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_holder: String,
    pub account_number: String,
    pub ifsc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementConfig {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            kind: String::from("ONDEMAND"),
        }
    }
}

/// Body of the provider's create-vendor call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorRegistration {
    pub vendor_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankDetails>,
    pub settlement_config: SettlementConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_details: Option<KycDetails>,
}

impl VendorRegistration {
    /// Active on-demand vendor keyed by the seller id
    pub fn for_seller(seller: &Seller, bank: Option<BankDetails>, kyc_details: Option<KycDetails>) -> Self {
        Self {
            vendor_id: seller.id.to_string(),
            name: seller.name.clone(),
            email: seller.email.clone(),
            phone: seller.phone_number.clone(),
            status: String::from("ACTIVE"),
            bank,
            settlement_config: SettlementConfig::default(),
            kyc_details,
        }
    }
}
