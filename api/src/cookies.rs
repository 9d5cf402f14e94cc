//! Auth cookie names and construction

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;

use bz_core::domain::entities::{Role, TokenPair};
use bz_shared::config::CookieConfig;

pub const USER_ACCESS_COOKIE: &str = "access-token";
pub const USER_REFRESH_COOKIE: &str = "refresh-token";
pub const SELLER_ACCESS_COOKIE: &str = "seller-access-token";
pub const SELLER_REFRESH_COOKIE: &str = "seller-refresh-token";

pub fn access_cookie_name(role: Role) -> &'static str {
    match role {
        Role::User => USER_ACCESS_COOKIE,
        Role::Seller => SELLER_ACCESS_COOKIE,
    }
}

pub fn refresh_cookie_name(role: Role) -> &'static str {
    match role {
        Role::User => USER_REFRESH_COOKIE,
        Role::Seller => SELLER_REFRESH_COOKIE,
    }
}

/// HttpOnly cookie on `/` carrying a token
pub fn token_cookie(name: &'static str, value: String, config: &CookieConfig) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(same_site(&config.same_site))
        .max_age(Duration::days(config.max_age_days))
        .finish()
}

/// Access and refresh cookies set on login
pub fn login_cookies(role: Role, tokens: TokenPair, config: &CookieConfig) -> [Cookie<'static>; 2] {
    [
        token_cookie(refresh_cookie_name(role), tokens.refresh_token, config),
        token_cookie(access_cookie_name(role), tokens.access_token, config),
    ]
}

fn same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "lax" => SameSite::Lax,
        _ => SameSite::None,
    }
}

/// Token from the `Authorization: Bearer` header
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// First non-empty cookie among `names`, then the Bearer header
pub fn token_from(req: &HttpRequest, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| req.cookie(name))
        .map(|c| c.value().to_string())
        .find(|v| !v.is_empty())
        .or_else(|| bearer_token(req))
}

/// Refresh token of either role
pub fn refresh_token_from(req: &HttpRequest) -> Option<String> {
    token_from(req, &[USER_REFRESH_COOKIE, SELLER_REFRESH_COOKIE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_token_cookie_attributes() {
        let cookie = token_cookie(USER_ACCESS_COOKIE, "jwt".to_string(), &CookieConfig::default());

        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn test_refresh_token_prefers_cookies() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SELLER_REFRESH_COOKIE, "seller-jwt"))
            .insert_header((AUTHORIZATION, "Bearer header-jwt"))
            .to_http_request();
        assert_eq!(refresh_token_from(&req).as_deref(), Some("seller-jwt"));

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer header-jwt"))
            .to_http_request();
        assert_eq!(refresh_token_from(&req).as_deref(), Some("header-jwt"));

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic abc"))
            .to_http_request();
        assert_eq!(refresh_token_from(&req), None);
    }
}
