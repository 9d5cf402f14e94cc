//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::{Claims, Role, TokenPair};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signs and verifies access and refresh JWTs
pub struct TokenService {
    config: TokenServiceConfig,
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
            config,
        }
    }

    /// Generates an access and refresh token for an account
    pub fn generate_tokens(&self, account_id: Uuid, role: Role) -> Result<TokenPair, DomainError> {
        let access_token = self.generate_access_token(account_id, role)?;
        let refresh_claims = Claims::new(
            account_id,
            role,
            Duration::days(self.config.refresh_token_expiry_days),
        );
        let refresh_token = self.encode_jwt(&refresh_claims, &self.refresh_encoding)?;
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Generates an access token only (used on refresh)
    pub fn generate_access_token(&self, account_id: Uuid, role: Role) -> Result<String, DomainError> {
        let claims = Claims::new(
            account_id,
            role,
            Duration::minutes(self.config.access_token_expiry_minutes),
        );
        self.encode_jwt(&claims, &self.access_encoding)
    }

    /// Verifies an access token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is invalid, expired, or signed with another secret
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.decode_jwt(token, &self.access_decoding)
    }

    /// Verifies a refresh token and returns the claims
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.decode_jwt(token, &self.refresh_decoding)
    }

    fn encode_jwt(&self, claims: &Claims, key: &EncodingKey) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, key).map_err(|e| {
            tracing::error!(error = %e, event = "token_generation_failed", "Failed to sign JWT");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    fn decode_jwt(&self, token: &str, key: &DecodingKey) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            if e.kind() == &ErrorKind::ExpiredSignature {
                DomainError::Token(TokenError::TokenExpired)
            } else {
                DomainError::Token(TokenError::InvalidToken)
            }
        })?;
        Ok(token_data.claims)
    }
}
