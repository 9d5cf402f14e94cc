//! MySQL repository implementations

mod seller_repository_impl;
mod shop_repository_impl;
mod user_repository_impl;

pub use seller_repository_impl::MySqlSellerRepository;
pub use shop_repository_impl::MySqlShopRepository;
pub use user_repository_impl::MySqlUserRepository;

use bz_core::domain::entities::Role;
use bz_core::errors::{DomainError, ValidationError};
use uuid::Uuid;

/// Map a failed query, turning a unique-key violation into the duplicate account error
pub(crate) fn write_error(role: Role, context: &str, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return ValidationError::AccountAlreadyExists { role }.into();
        }
    }
    query_error(context, e)
}

pub(crate) fn query_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, context, "Database query failed");
    DomainError::internal(format!("{}: {}", context, e))
}

pub(crate) fn parse_uuid(column: &str, value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", column, e)))
}
