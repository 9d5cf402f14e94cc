use actix_web::{web, HttpResponse};
use validator::Validate;

use bz_core::domain::entities::Account;

use crate::cookies::login_cookies;
use crate::dto::{
    LoggedInUserResponse, LoginDto, MessageResponse, RegistrationDto, UserLoginResponse,
    VerifyAccountDto,
};
use crate::handlers::ApiError;
use crate::middleware::AuthenticatedAccount;
use crate::state::AppState;

use super::{LOGIN_SUCCESS, OTP_SENT};

/// POST /api/user-registration
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegistrationDto>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    state.auth.register_user(body.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(OTP_SENT)))
}

/// POST /api/verify-user
pub async fn verify(
    state: web::Data<AppState>,
    body: web::Json<VerifyAccountDto>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    state.auth.verify_user(body.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("User registered successfully")))
}

/// POST /api/login-user
///
/// Sets `refresh-token` and `access-token`.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginDto>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let session = state.auth.login_user(body.into_inner().into()).await?;

    let mut response = HttpResponse::Ok();
    for cookie in login_cookies(session.role, session.tokens, &state.cookies) {
        response.cookie(cookie);
    }
    Ok(response.json(UserLoginResponse {
        message: LOGIN_SUCCESS.to_string(),
        user: session.account,
    }))
}

/// GET /api/logged-in-user
///
/// Accepts either role and echoes the account back.
pub async fn logged_in(account: AuthenticatedAccount) -> Result<HttpResponse, ApiError> {
    let user: Account = account.into_inner();
    Ok(HttpResponse::Created().json(LoggedInUserResponse {
        success: true,
        user,
    }))
}
