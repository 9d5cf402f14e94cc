//! CORS configuration
//!
//! Auth travels in cookies, so credentials are always allowed and origins
//! must be listed explicitly.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use bz_shared::config::Environment;

/// Max age of preflight responses in seconds
const PREFLIGHT_MAX_AGE: usize = 3600;

/// CORS for the given environment
///
/// Outside production any origin is mirrored back; in production only
/// `allowed_origins` are accepted.
pub fn create_cors(environment: Environment, allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(PREFLIGHT_MAX_AGE)
        .supports_credentials();

    if !environment.is_production() {
        tracing::info!(environment = %environment, "Configuring permissive CORS");
        return cors.allow_any_origin();
    }

    allowed_origins.iter().fold(cors, |cors, origin| {
        tracing::info!(origin = %origin, "Adding allowed origin");
        cors.allowed_origin(origin)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    #[actix_rt::test]
    async fn test_production_rejects_unlisted_origin() {
        let origins = vec![String::from("https://shop.example.com")];
        let app = test::init_service(
            App::new()
                .wrap(create_cors(Environment::Production, &origins))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://shop.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://shop.example.com"
        );
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://evil.example.com"))
            .to_request();
        let resp = test::try_call_service(&app, req).await;
        match resp {
            Ok(resp) => assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none()),
            Err(err) => assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST),
        }
    }
}
