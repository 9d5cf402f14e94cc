//! Application state shared by all workers

use std::sync::Arc;

use bz_core::repositories::{SellerRepository, ShopRepository, UserRepository};
use bz_core::services::{
    AuthService, KeyValueStore, MailSender, OtpService, PasswordHasher, SellerOnboardingService,
    TokenService, TokenServiceConfig, VendorGateway,
};
use bz_infra::InfrastructureServices;
use bz_shared::config::{AppConfig, CookieConfig};

/// Adapters the services are built from
#[derive(Clone)]
pub struct Collaborators {
    pub users: Arc<dyn UserRepository>,
    pub sellers: Arc<dyn SellerRepository>,
    pub shops: Arc<dyn ShopRepository>,
    pub store: Arc<dyn KeyValueStore>,
    pub mailer: Arc<dyn MailSender>,
    pub vendors: Arc<dyn VendorGateway>,
}

impl From<&InfrastructureServices> for Collaborators {
    fn from(infra: &InfrastructureServices) -> Self {
        Self {
            users: infra.users.clone(),
            sellers: infra.sellers.clone(),
            shops: infra.shops.clone(),
            store: infra.store.clone(),
            mailer: infra.mailer.clone(),
            vendors: infra.vendors.clone(),
        }
    }
}

/// Services handed to every handler through `web::Data`
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub onboarding: Arc<SellerOnboardingService>,
    pub cookies: CookieConfig,
}

impl AppState {
    pub fn new(config: &AppConfig, collaborators: Collaborators) -> Self {
        let otp = Arc::new(OtpService::new(
            collaborators.store,
            collaborators.mailer,
            config.otp.clone(),
        ));
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));

        let auth = AuthService::new(
            collaborators.users,
            collaborators.sellers.clone(),
            otp,
            tokens,
            PasswordHasher::with_cost(config.auth.bcrypt_cost),
        );
        let onboarding = SellerOnboardingService::new(
            collaborators.sellers,
            collaborators.shops,
            collaborators.vendors,
        );

        Self {
            auth: Arc::new(auth),
            onboarding: Arc::new(onboarding),
            cookies: config.auth.cookie.clone(),
        }
    }
}
