use actix_web::{web, HttpResponse};
use validator::Validate;

use bz_core::domain::entities::Role;

use crate::dto::{ForgotPasswordDto, MessageResponse, ResetPasswordDto, VerifyResetOtpDto};
use crate::handlers::ApiError;
use crate::state::AppState;

async fn forgot(
    state: &AppState,
    role: Role,
    body: ForgotPasswordDto,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    state.auth.forgot_password(role, body.into()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "OTP sent to email. Please verify your account.",
    )))
}

async fn verify_forgot(
    state: &AppState,
    role: Role,
    body: VerifyResetOtpDto,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    state.auth.verify_forgot_password(role, body.into()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "OTP verified. You can now reset your password",
    )))
}

async fn reset(
    state: &AppState,
    role: Role,
    body: ResetPasswordDto,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    state.auth.reset_password(role, body.into()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Password reset successfully!")))
}

/// POST /api/forgot-password-user
pub async fn forgot_user(
    state: web::Data<AppState>,
    body: web::Json<ForgotPasswordDto>,
) -> Result<HttpResponse, ApiError> {
    forgot(&state, Role::User, body.into_inner()).await
}

/// POST /api/forgot-password-seller
pub async fn forgot_seller(
    state: web::Data<AppState>,
    body: web::Json<ForgotPasswordDto>,
) -> Result<HttpResponse, ApiError> {
    forgot(&state, Role::Seller, body.into_inner()).await
}

/// POST /api/verify-forgot-password-user
pub async fn verify_forgot_user(
    state: web::Data<AppState>,
    body: web::Json<VerifyResetOtpDto>,
) -> Result<HttpResponse, ApiError> {
    verify_forgot(&state, Role::User, body.into_inner()).await
}

/// POST /api/verify-forgot-password-seller
pub async fn verify_forgot_seller(
    state: web::Data<AppState>,
    body: web::Json<VerifyResetOtpDto>,
) -> Result<HttpResponse, ApiError> {
    verify_forgot(&state, Role::Seller, body.into_inner()).await
}

/// POST /api/reset-password-user
pub async fn reset_user(
    state: web::Data<AppState>,
    body: web::Json<ResetPasswordDto>,
) -> Result<HttpResponse, ApiError> {
    reset(&state, Role::User, body.into_inner()).await
}

/// POST /api/reset-password-seller
pub async fn reset_seller(
    state: web::Data<AppState>,
    body: web::Json<ResetPasswordDto>,
) -> Result<HttpResponse, ApiError> {
    reset(&state, Role::Seller, body.into_inner()).await
}
