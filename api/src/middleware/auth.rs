//! JWT authentication middleware for protected endpoints
//!
//! Reads the access token from the role cookie or an `Authorization: Bearer`
//! header, resolves it to the account through [`AuthService::authenticate`]
//! and stores the account in the request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use bz_core::domain::entities::{Account, Role};
use bz_core::errors::{AuthError, DomainError};

use crate::cookies::{SELLER_ACCESS_COOKIE, USER_ACCESS_COOKIE};
use crate::handlers::ApiError;
use crate::state::AppState;

/// Account resolved from the request's access token
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount(pub Account);

impl AuthenticatedAccount {
    pub fn into_inner(self) -> Account {
        self.0
    }
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth {
    /// Role the route is restricted to
    required_role: Option<Role>,
}

impl JwtAuth {
    /// Any authenticated account
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accounts of `role`; others get 403
    pub fn require(role: Role) -> Self {
        Self {
            required_role: Some(role),
        }
    }

    /// Cookie names to try, the required role's first
    fn cookie_names(&self) -> [&'static str; 2] {
        match self.required_role {
            Some(Role::Seller) => [SELLER_ACCESS_COOKIE, USER_ACCESS_COOKIE],
            _ => [USER_ACCESS_COOKIE, SELLER_ACCESS_COOKIE],
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            auth: *self,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    auth: JwtAuth,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let auth = self.auth;

        Box::pin(async move {
            let outcome = resolve_account(&req, auth).await;
            match outcome {
                Ok(account) => {
                    req.extensions_mut().insert(AuthenticatedAccount(account));
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                // Rejections are answered here so they carry the JSON error body
                Err(err) => Ok(req.error_response(err).map_into_right_body()),
            }
        })
    }
}

async fn resolve_account(req: &ServiceRequest, auth: JwtAuth) -> Result<Account, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| ApiError::from(DomainError::internal("Application state not configured")))?;

    let token = crate::cookies::token_from(req.request(), &auth.cookie_names())
        .ok_or(AuthError::Unauthenticated)?;

    let account = state.auth.authenticate(&token).await?;

    if let Some(required) = auth.required_role {
        if account.role() != required {
            tracing::warn!(
                account_id = %account.id(),
                role = account.role().as_str(),
                required = required.as_str(),
                event = "access_denied"
            );
            return Err(AuthError::InsufficientRole { required }.into());
        }
    }

    Ok(account)
}

impl FromRequest for AuthenticatedAccount {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthenticatedAccount>()
            .cloned()
            .ok_or_else(|| ApiError::from(AuthError::Unauthenticated).into());

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_preference_follows_required_role() {
        assert_eq!(JwtAuth::new().cookie_names()[0], USER_ACCESS_COOKIE);
        assert_eq!(JwtAuth::require(Role::Seller).cookie_names()[0], SELLER_ACCESS_COOKIE);
    }

    #[actix_rt::test]
    async fn test_extractor_without_middleware_is_unauthorized() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let err = AuthenticatedAccount::extract(&req).await.unwrap_err();
        assert_eq!(err.as_response_error().status_code(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
