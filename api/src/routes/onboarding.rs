//! Seller onboarding route handlers

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{CreateShopDto, CreateVendorDto, ShopCreatedResponse, VendorCreatedResponse};
use crate::handlers::ApiError;
use crate::state::AppState;

/// POST /api/create-shop
pub async fn create_shop(
    state: web::Data<AppState>,
    body: web::Json<CreateShopDto>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let shop = state.onboarding.create_shop(body.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(ShopCreatedResponse {
        shop,
        message: String::from("Shop created successfully"),
    }))
}

/// POST /api/create-cashfree-vendor
pub async fn create_vendor(
    state: web::Data<AppState>,
    body: web::Json<CreateVendorDto>,
) -> Result<HttpResponse, ApiError> {
    let vendor = state
        .onboarding
        .create_payment_vendor(body.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(VendorCreatedResponse {
        success: true,
        vendor,
        message: String::from("Seller registered as Cashfree vendor successfully"),
    }))
}
