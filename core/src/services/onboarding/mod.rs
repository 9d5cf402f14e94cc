//! Seller onboarding: shop creation and payment vendor registration

mod service;
mod traits;
mod types;


pub use service::SellerOnboardingService;
pub use traits::{VendorGateway, VendorGatewayError};
pub use types::{
    BankDetails, CreateShopRequest, CreateVendorRequest, KycDetails, SettlementConfig,
    VendorRegistration,
};
