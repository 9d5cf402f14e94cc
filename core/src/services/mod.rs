//! Business services containing domain logic and use cases.

pub mod auth;
pub mod onboarding;
pub mod otp;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use onboarding::{SellerOnboardingService, VendorGateway, VendorGatewayError};
pub use otp::{KeyValueStore, MailSender, OtpService, OtpTemplate};
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
