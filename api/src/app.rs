//! Application factory
//!
//! Builds the actix-web `App` with state, middleware and routes. Shared by
//! the binary and the HTTP tests.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use bz_shared::config::{Environment, ServerConfig};
use bz_shared::errors::{error_codes, ErrorResponse};

use crate::handlers::json_error_handler;
use crate::middleware::create_cors;
use crate::routes::{self, health::health_check};
use crate::state::AppState;

/// Largest accepted JSON body
const JSON_LIMIT_BYTES: usize = 64 * 1024;

/// Create and configure the application
pub fn create_app(
    state: web::Data<AppState>,
    server: &ServerConfig,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(json_error_handler);

    App::new()
        .app_data(state)
        .app_data(json_config)
        .wrap(create_cors(environment, &server.allowed_origins))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .configure(routes::configure)
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
