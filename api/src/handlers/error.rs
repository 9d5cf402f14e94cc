//! Mapping from domain errors to HTTP responses
//!
//! Every failure leaves the API as `{ "status": "error", "message", "error" }`.

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use validator::ValidationErrors;

use bz_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use bz_shared::errors::{error_codes, ErrorResponse};

/// Message sent in place of internal error details
const INTERNAL_MESSAGE: &str = "Something went wrong, please try again!";

/// Error returned by handlers and middleware
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] DomainError);

impl ApiError {
    fn code(&self) -> &'static str {
        match &self.0 {
            DomainError::Validation(_) => error_codes::VALIDATION_ERROR,
            DomainError::Auth(e) if e.is_forbidden() => error_codes::FORBIDDEN,
            DomainError::Auth(_) => error_codes::UNAUTHORIZED,
            DomainError::Token(TokenError::TokenExpired) => error_codes::TOKEN_EXPIRED,
            DomainError::Token(TokenError::TokenGenerationFailed) => error_codes::INTERNAL_ERROR,
            DomainError::Token(_) => error_codes::TOKEN_INVALID,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match &self.0 {
            DomainError::Internal { .. } | DomainError::Token(TokenError::TokenGenerationFailed) => {
                INTERNAL_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError(e.into())
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError(e.into())
    }
}

/// First offending field becomes an `InvalidField` error
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .keys()
            .min()
            .map(|f| f.to_string())
            .unwrap_or_else(|| String::from("body"));
        ValidationError::InvalidField { field }.into()
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Auth(e) if e.is_forbidden() => StatusCode::FORBIDDEN,
            DomainError::Auth(_) => StatusCode::UNAUTHORIZED,
            DomainError::Token(TokenError::TokenGenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::Token(_) => StatusCode::UNAUTHORIZED,
            DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, event = "request_failed", "Internal error");
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), event = "request_rejected");
        }
        HttpResponse::build(status).json(ErrorResponse::new(self.code(), self.public_message()))
    }
}

/// Malformed or oversized JSON bodies answer with the standard error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => String::from("Content type must be application/json"),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            String::from("Request body too large")
        }
        other => format!("Invalid JSON body: {}", other),
    };
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message));
    actix_web::error::InternalError::from_response(err, response).into()
}
