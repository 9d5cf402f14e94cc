//! Route table

pub mod auth;
pub mod health;
pub mod onboarding;

use actix_web::web;

use bz_core::domain::entities::Role;

use crate::middleware::JwtAuth;

/// Register every `/api` route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // User
            .route("/user-registration", web::post().to(auth::user::register))
            .route("/verify-user", web::post().to(auth::user::verify))
            .route("/login-user", web::post().to(auth::user::login))
            .route("/refresh-token", web::post().to(auth::token::refresh))
            .service(
                web::resource("/logged-in-user")
                    .wrap(JwtAuth::new())
                    .route(web::get().to(auth::user::logged_in)),
            )
            .route("/forgot-password-user", web::post().to(auth::password::forgot_user))
            .route(
                "/verify-forgot-password-user",
                web::post().to(auth::password::verify_forgot_user),
            )
            .route("/reset-password-user", web::post().to(auth::password::reset_user))
            // Seller
            .route("/seller-registration", web::post().to(auth::seller::register))
            .route("/verify-seller", web::post().to(auth::seller::verify))
            .route("/login-seller", web::post().to(auth::seller::login))
            .service(
                web::resource("/logged-in-seller")
                    .wrap(JwtAuth::require(Role::Seller))
                    .route(web::get().to(auth::seller::logged_in)),
            )
            .route("/forgot-password-seller", web::post().to(auth::password::forgot_seller))
            .route(
                "/verify-forgot-password-seller",
                web::post().to(auth::password::verify_forgot_seller),
            )
            .route("/reset-password-seller", web::post().to(auth::password::reset_seller))
            .route("/create-shop", web::post().to(onboarding::create_shop))
            .route("/create-cashfree-vendor", web::post().to(onboarding::create_vendor)),
    );
}
