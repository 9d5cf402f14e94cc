//! Authentication request bodies
//!
//! Every field is optional so that a missing value reaches the service and
//! gets its specific message. Lengths are bounded here.

use serde::{Deserialize, Serialize};
use validator::Validate;

use bz_core::services::auth::{
    ForgotPasswordRequest, LoginRequest, RegistrationRequest, ResetPasswordRequest,
    VerifyAccountRequest, VerifyResetOtpRequest,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegistrationDto {
    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 254))]
    pub email: Option<String>,

    #[validate(length(max = 128))]
    pub password: Option<String>,

    /// Sellers only
    #[validate(length(max = 20))]
    pub phone_number: Option<String>,

    /// Sellers only
    #[validate(length(max = 64))]
    pub country: Option<String>,
}

impl From<RegistrationDto> for RegistrationRequest {
    fn from(dto: RegistrationDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            phone_number: dto.phone_number,
            country: dto.country,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VerifyAccountDto {
    #[validate(length(max = 254))]
    pub email: Option<String>,

    #[validate(length(max = 10))]
    pub otp: Option<String>,

    #[validate(length(max = 128))]
    pub password: Option<String>,

    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 20))]
    pub phone_number: Option<String>,

    #[validate(length(max = 64))]
    pub country: Option<String>,
}

impl From<VerifyAccountDto> for VerifyAccountRequest {
    fn from(dto: VerifyAccountDto) -> Self {
        Self {
            email: dto.email,
            otp: dto.otp,
            password: dto.password,
            name: dto.name,
            phone_number: dto.phone_number,
            country: dto.country,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(length(max = 254))]
    pub email: Option<String>,

    #[validate(length(max = 128))]
    pub password: Option<String>,
}

impl From<LoginDto> for LoginRequest {
    fn from(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordDto {
    #[validate(length(max = 254))]
    pub email: Option<String>,
}

impl From<ForgotPasswordDto> for ForgotPasswordRequest {
    fn from(dto: ForgotPasswordDto) -> Self {
        Self { email: dto.email }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VerifyResetOtpDto {
    #[validate(length(max = 254))]
    pub email: Option<String>,

    #[validate(length(max = 10))]
    pub otp: Option<String>,
}

impl From<VerifyResetOtpDto> for VerifyResetOtpRequest {
    fn from(dto: VerifyResetOtpDto) -> Self {
        Self {
            email: dto.email,
            otp: dto.otp,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ResetPasswordDto {
    #[validate(length(max = 254))]
    pub email: Option<String>,

    #[serde(rename = "newPassword")]
    #[validate(length(max = 128))]
    pub new_password: Option<String>,
}

impl From<ResetPasswordDto> for ResetPasswordRequest {
    fn from(dto: ResetPasswordDto) -> Self {
        Self {
            email: dto.email,
            new_password: dto.new_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_password_uses_camel_case_field() {
        let dto: ResetPasswordDto =
            serde_json::from_str(r#"{"email":"a@b.com","newPassword":"secret"}"#).unwrap();
        assert_eq!(dto.new_password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let dto: RegistrationDto = serde_json::from_str("{}").unwrap();
        assert!(dto.name.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_oversized_otp_rejected() {
        let dto = VerifyResetOtpDto {
            email: Some("a@b.com".into()),
            otp: Some("1".repeat(64)),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("otp"));
    }
}
