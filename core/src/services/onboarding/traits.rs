//! Payment provider integration

use async_trait::async_trait;
use thiserror::Error;

use super::types::VendorRegistration;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VendorGatewayError {
    /// The provider answered with a non-success status
    #[error("{message}")]
    Rejected { message: String },

    /// The provider could not be reached or answered garbage
    #[error("Vendor API transport error: {0}")]
    Transport(String),
}

/// Registers sellers as split-settlement vendors with the payment provider
#[async_trait]
pub trait VendorGateway: Send + Sync {
    /// Create the vendor and return the provider's response body
    async fn create_vendor(
        &self,
        registration: &VendorRegistration,
    ) -> Result<serde_json::Value, VendorGatewayError>;
}
