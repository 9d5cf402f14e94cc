use actix_web::{web, HttpResponse};
use validator::Validate;

use bz_core::domain::entities::{Account, Role};
use bz_core::errors::AuthError;

use crate::cookies::login_cookies;
use crate::dto::{
    LoggedInSellerResponse, LoginDto, MessageResponse, RegistrationDto, SellerLoginResponse,
    SellerRegisteredResponse, VerifyAccountDto,
};
use crate::handlers::ApiError;
use crate::middleware::AuthenticatedAccount;
use crate::state::AppState;

use super::{LOGIN_SUCCESS, OTP_SENT};

/// POST /api/seller-registration
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegistrationDto>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    state.auth.register_seller(body.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(OTP_SENT)))
}

/// POST /api/verify-seller
pub async fn verify(
    state: web::Data<AppState>,
    body: web::Json<VerifyAccountDto>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let seller = state.auth.verify_seller(body.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(SellerRegisteredResponse {
        seller,
        message: String::from("Seller registered successfully"),
    }))
}

/// POST /api/login-seller
///
/// Sets `seller-refresh-token` and `seller-access-token`.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginDto>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let session = state.auth.login_seller(body.into_inner().into()).await?;

    let mut response = HttpResponse::Ok();
    for cookie in login_cookies(session.role, session.tokens, &state.cookies) {
        response.cookie(cookie);
    }
    Ok(response.json(SellerLoginResponse {
        message: LOGIN_SUCCESS.to_string(),
        seller: session.account,
    }))
}

/// GET /api/logged-in-seller
pub async fn logged_in(account: AuthenticatedAccount) -> Result<HttpResponse, ApiError> {
    let Account::Seller(seller) = account.into_inner() else {
        return Err(AuthError::InsufficientRole {
            required: Role::Seller,
        }
        .into());
    };
    Ok(HttpResponse::Created().json(LoggedInSellerResponse {
        success: true,
        seller,
    }))
}
