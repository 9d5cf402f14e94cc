//! Input validation shared by the registration and confirmation flows

use bz_shared::utils::{is_valid_email, normalize_email};

use crate::domain::entities::Role;
use crate::errors::ValidationError;

use super::types::RegistrationRequest;

/// Registration input with every required field present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRegistration {
    pub name: String,
    /// Normalised (trimmed, lowercase)
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub country: Option<String>,
}

/// Blank or absent values count as missing
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Check required fields for `role`, then the email format
pub fn validate_registration_data(
    request: &RegistrationRequest,
    role: Role,
) -> Result<ValidatedRegistration, ValidationError> {
    let (Some(name), Some(email), Some(password)) = (
        present(&request.name),
        present(&request.email),
        present(&request.password),
    ) else {
        return Err(ValidationError::MissingRequiredFields);
    };

    let phone_number = present(&request.phone_number).map(str::to_string);
    let country = present(&request.country).map(str::to_string);
    if role == Role::Seller && (phone_number.is_none() || country.is_none()) {
        return Err(ValidationError::MissingRequiredFields);
    }

    let email = normalize_email(email);
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(ValidatedRegistration {
        name: name.trim().to_string(),
        email,
        password: password.to_string(),
        phone_number,
        country,
    })
}
