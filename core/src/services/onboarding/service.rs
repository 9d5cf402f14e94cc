//! Seller onboarding service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewShop, Role, Shop};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{SellerRepository, ShopRepository};
use crate::services::auth::present;

use super::traits::{VendorGateway, VendorGatewayError};
use super::types::{CreateShopRequest, CreateVendorRequest, VendorRegistration};

/// Shop creation and payment vendor registration for sellers
pub struct SellerOnboardingService {
    sellers: Arc<dyn SellerRepository>,
    shops: Arc<dyn ShopRepository>,
    gateway: Arc<dyn VendorGateway>,
}

impl SellerOnboardingService {
    pub fn new(
        sellers: Arc<dyn SellerRepository>,
        shops: Arc<dyn ShopRepository>,
        gateway: Arc<dyn VendorGateway>,
    ) -> Self {
        Self {
            sellers,
            shops,
            gateway,
        }
    }

    /// Create a shop for an existing seller
    ///
    /// Every field is required. A whitespace-only website passes the check
    /// but is not stored.
    pub async fn create_shop(&self, request: CreateShopRequest) -> DomainResult<Shop> {
        let website = request.website.as_deref().filter(|w| !w.is_empty());
        let (Some(name), Some(bio), Some(address), Some(opening_hours), Some(website), Some(category), Some(seller_id)) = (
            present(&request.name),
            present(&request.bio),
            present(&request.address),
            present(&request.opening_hours),
            website,
            present(&request.category),
            present(&request.seller_id),
        ) else {
            return Err(ValidationError::AllFieldsRequired.into());
        };

        let seller_id = Uuid::parse_str(seller_id.trim()).map_err(|_| ValidationError::InvalidField {
            field: String::from("sellerId"),
        })?;
        if self.sellers.find_by_id(seller_id).await?.is_none() {
            return Err(ValidationError::AccountDoesNotExist { role: Role::Seller }.into());
        }

        let shop = self
            .shops
            .create(Shop::new(NewShop {
                name: name.trim().to_string(),
                bio: bio.to_string(),
                address: address.to_string(),
                opening_hours: opening_hours.to_string(),
                website: Some(website.trim().to_string()),
                category: category.to_string(),
                seller_id,
            }))
            .await?;

        tracing::info!(shop_id = %shop.id, seller_id = %seller_id, event = "shop_created", "Shop created");
        Ok(shop)
    }

    /// Register a seller with the payment provider and record the vendor id
    ///
    /// Returns the provider's response body.
    pub async fn create_payment_vendor(&self, request: CreateVendorRequest) -> DomainResult<serde_json::Value> {
        let seller_id = present(&request.seller_id).ok_or(ValidationError::SellerIdRequired)?;

        // An id that is not a UUID cannot name a stored seller
        let mut seller = match Uuid::parse_str(seller_id.trim()) {
            Ok(id) => self.sellers.find_by_id(id).await?,
            Err(_) => None,
        }
        .ok_or(ValidationError::SellerNotFoundInDb)?;

        let registration = VendorRegistration::for_seller(&seller, request.bank, request.kyc_details);
        let response = self
            .gateway
            .create_vendor(&registration)
            .await
            .map_err(|e| match e {
                VendorGatewayError::Rejected { message } => {
                    tracing::warn!(seller_id = %seller.id, error = %message, event = "vendor_rejected");
                    DomainError::from(ValidationError::VendorRejected { message })
                }
                VendorGatewayError::Transport(message) => {
                    tracing::error!(seller_id = %seller.id, error = %message, event = "vendor_transport_failed");
                    DomainError::internal(message)
                }
            })?;

        let vendor_id = response
            .get("vendor_id")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| registration.vendor_id.clone());
        seller.link_vendor(vendor_id.clone());
        self.sellers.update(seller).await?;

        tracing::info!(vendor_id = %vendor_id, event = "vendor_created", "Seller registered as payment vendor");
        Ok(response)
    }
}
