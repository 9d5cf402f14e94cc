//! Request and response bodies

pub mod auth;
pub mod onboarding;
pub mod responses;

pub use auth::{
    ForgotPasswordDto, LoginDto, RegistrationDto, ResetPasswordDto, VerifyAccountDto,
    VerifyResetOtpDto,
};
pub use onboarding::{CreateShopDto, CreateVendorDto};
pub use responses::*;
