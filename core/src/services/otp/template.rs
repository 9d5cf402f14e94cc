//! Mail templates used for OTP delivery

use serde::{Deserialize, Serialize};

use crate::domain::entities::Role;

/// Which email template carries the code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OtpTemplate {
    UserActivationMail,
    SellerActivationMail,
    ForgotPasswordUserMail,
    ForgotPasswordSellerMail,
}

impl OtpTemplate {
    /// Template identifier, also the template file stem
    pub fn name(&self) -> &'static str {
        match self {
            OtpTemplate::UserActivationMail => "user-activation-mail",
            OtpTemplate::SellerActivationMail => "seller-activation-mail",
            OtpTemplate::ForgotPasswordUserMail => "forgot-password-user-mail",
            OtpTemplate::ForgotPasswordSellerMail => "forgot-password-seller-mail",
        }
    }

    pub fn activation(role: Role) -> Self {
        match role {
            Role::User => OtpTemplate::UserActivationMail,
            Role::Seller => OtpTemplate::SellerActivationMail,
        }
    }

    pub fn password_reset(role: Role) -> Self {
        match role {
            Role::User => OtpTemplate::ForgotPasswordUserMail,
            Role::Seller => OtpTemplate::ForgotPasswordSellerMail,
        }
    }
}

impl std::fmt::Display for OtpTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
