//! Seller onboarding request bodies

use serde::{Deserialize, Serialize};
use validator::Validate;

use bz_core::services::onboarding::{BankDetails, CreateShopRequest, CreateVendorRequest, KycDetails};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateShopDto {
    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 1000))]
    pub bio: Option<String>,

    #[validate(length(max = 500))]
    pub address: Option<String>,

    #[validate(length(max = 200))]
    pub opening_hours: Option<String>,

    #[validate(length(max = 255))]
    pub website: Option<String>,

    #[validate(length(max = 100))]
    pub category: Option<String>,

    #[serde(rename = "sellerId")]
    pub seller_id: Option<String>,
}

impl From<CreateShopDto> for CreateShopRequest {
    fn from(dto: CreateShopDto) -> Self {
        Self {
            name: dto.name,
            bio: dto.bio,
            address: dto.address,
            opening_hours: dto.opening_hours,
            website: dto.website,
            category: dto.category,
            seller_id: dto.seller_id,
        }
    }
}

/// Bank and KYC details are forwarded to the provider when present
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateVendorDto {
    #[serde(rename = "sellerId")]
    pub seller_id: Option<String>,

    pub bank: Option<BankDetails>,

    pub kyc_details: Option<KycDetails>,
}

impl From<CreateVendorDto> for CreateVendorRequest {
    fn from(dto: CreateVendorDto) -> Self {
        Self {
            seller_id: dto.seller_id,
            bank: dto.bank,
            kyc_details: dto.kyc_details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_body_field_names() {
        let dto: CreateShopDto = serde_json::from_str(
            r#"{"name":"Corner","opening_hours":"9-5","sellerId":"abc"}"#,
        )
        .unwrap();
        assert_eq!(dto.opening_hours.as_deref(), Some("9-5"));
        assert_eq!(dto.seller_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_vendor_body_with_bank() {
        let dto: CreateVendorDto = serde_json::from_str(
            r#"{"sellerId":"abc","bank":{"account_holder":"A","account_number":"1","ifsc":"X"}}"#,
        )
        .unwrap();
        let request = CreateVendorRequest::from(dto);
        assert_eq!(request.bank.map(|b| b.ifsc), Some("X".to_string()));
        assert!(request.kyc_details.is_none());
    }
}
