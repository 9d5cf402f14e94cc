//! Cashfree Easy Split vendor onboarding

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use bz_core::services::onboarding::{VendorGateway, VendorGatewayError, VendorRegistration};
use bz_shared::config::PaymentConfig;

use crate::InfrastructureError;

const FALLBACK_REJECTION: &str = "Failed to create vendor";

/// HTTP client for the vendor creation endpoint
pub struct CashfreeGateway {
    client: Client,
    config: PaymentConfig,
}

impl CashfreeGateway {
    pub fn new(config: PaymentConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl VendorGateway for CashfreeGateway {
    async fn create_vendor(
        &self,
        registration: &VendorRegistration,
    ) -> Result<serde_json::Value, VendorGatewayError> {
        let response = self
            .client
            .post(self.config.vendors_url())
            .header("x-client-id", &self.config.app_id)
            .header("x-client-secret", &self.config.secret_key)
            .header("x-api-version", &self.config.api_version)
            .json(registration)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Vendor API request failed");
                VendorGatewayError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| VendorGatewayError::Transport(format!("Unreadable vendor API response: {}", e)))?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Vendor API rejected registration");
            return Err(VendorGatewayError::Rejected {
                message: rejection_message(&body),
            });
        }

        debug!(vendor_id = %registration.vendor_id, "Vendor created");
        Ok(body)
    }
}

/// Provider error text from a failure body
pub(crate) fn rejection_message(body: &serde_json::Value) -> String {
    body.get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_REJECTION)
        .to_string()
}
