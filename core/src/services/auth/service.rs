//! Main authentication service implementation

use bz_shared::utils::{mask_email, normalize_email};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Account, Role, Seller, User};
use crate::domain::value_objects::{AccountSummary, AuthResponse};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
use crate::repositories::{SellerRepository, UserRepository};
use crate::services::otp::{OtpService, OtpTemplate};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::types::{
    ForgotPasswordRequest, LoginRequest, RefreshedSession, RegistrationRequest,
    ResetPasswordRequest, VerifyAccountRequest, VerifyResetOtpRequest,
};
use super::validation::{present, validate_registration_data};

/// Authentication service for managing the complete authentication flow
pub struct AuthService {
    /// Shopper accounts
    users: Arc<dyn UserRepository>,
    /// Merchant accounts
    sellers: Arc<dyn SellerRepository>,
    /// OTP issuance and verification
    otp: Arc<OtpService>,
    /// Token service for JWT management
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(
        users: Arc<dyn UserRepository>,
        sellers: Arc<dyn SellerRepository>,
        otp: Arc<OtpService>,
        tokens: Arc<TokenService>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            sellers,
            otp,
            tokens,
            hasher,
        }
    }

    /// Start user registration by mailing an activation OTP
    pub async fn register_user(&self, request: RegistrationRequest) -> DomainResult<()> {
        let data = validate_registration_data(&request, Role::User)?;

        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(ValidationError::AccountAlreadyExists { role: Role::User }.into());
        }

        self.otp
            .issue(&data.name, &data.email, OtpTemplate::activation(Role::User))
            .await?;

        tracing::info!(email = %mask_email(&data.email), event = "user_registration_started");
        Ok(())
    }

    /// Confirm the OTP and create the user
    pub async fn verify_user(&self, request: VerifyAccountRequest) -> DomainResult<User> {
        let (Some(email), Some(otp), Some(password), Some(name)) = (
            present(&request.email),
            present(&request.otp),
            present(&request.password),
            present(&request.name),
        ) else {
            return Err(ValidationError::AllFieldsRequired.into());
        };
        let email = normalize_email(email);

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(ValidationError::AccountAlreadyExists { role: Role::User }.into());
        }

        self.otp.verify_otp(&email, otp).await?;
        let password_hash = self.hasher.hash(password).await?;

        let user = self
            .users
            .create(User::new(name.trim().to_string(), email, password_hash))
            .await?;

        tracing::info!(user_id = %user.id, event = "user_registered", "User registered");
        Ok(user)
    }

    /// Check credentials and issue a token pair
    ///
    /// An unknown email always reports "does not exist", never a password
    /// mismatch.
    pub async fn login_user(&self, request: LoginRequest) -> DomainResult<AuthResponse> {
        let (email, password) = login_fields(&request)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountDoesNotExist { role: Role::User })?;

        let Some(hash) = user.password.as_deref() else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !self.hasher.verify(password, hash).await? {
            tracing::warn!(email = %mask_email(&email), event = "login_failed", role = "user");
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.tokens.generate_tokens(user.id, Role::User)?;
        tracing::info!(user_id = %user.id, event = "login_success", role = "user");
        Ok(AuthResponse::new(Role::User, tokens, AccountSummary::from(&user)))
    }

    /// Start seller registration by mailing an activation OTP
    pub async fn register_seller(&self, request: RegistrationRequest) -> DomainResult<()> {
        let data = validate_registration_data(&request, Role::Seller)?;

        if self.sellers.find_by_email(&data.email).await?.is_some() {
            return Err(ValidationError::AccountAlreadyExists { role: Role::Seller }.into());
        }

        self.otp
            .issue(&data.name, &data.email, OtpTemplate::activation(Role::Seller))
            .await?;

        tracing::info!(email = %mask_email(&data.email), event = "seller_registration_started");
        Ok(())
    }

    /// Confirm the OTP and create the seller
    pub async fn verify_seller(&self, request: VerifyAccountRequest) -> DomainResult<Seller> {
        let (Some(email), Some(otp), Some(password), Some(name), Some(phone_number), Some(country)) = (
            present(&request.email),
            present(&request.otp),
            present(&request.password),
            present(&request.name),
            present(&request.phone_number),
            present(&request.country),
        ) else {
            return Err(ValidationError::AllFieldsRequired.into());
        };
        let email = normalize_email(email);

        if self.sellers.find_by_email(&email).await?.is_some() {
            return Err(ValidationError::AccountAlreadyExists { role: Role::Seller }.into());
        }

        self.otp.verify_otp(&email, otp).await?;
        let password_hash = self.hasher.hash(password).await?;

        let seller = self
            .sellers
            .create(Seller::new(
                name.trim().to_string(),
                email,
                phone_number.trim().to_string(),
                country.trim().to_string(),
                password_hash,
            ))
            .await?;

        tracing::info!(seller_id = %seller.id, event = "seller_registered", "Seller registered");
        Ok(seller)
    }

    /// Check seller credentials and issue a token pair
    pub async fn login_seller(&self, request: LoginRequest) -> DomainResult<AuthResponse> {
        let (email, password) = login_fields(&request)?;

        let seller = self
            .sellers
            .find_by_email(&email)
            .await?
            .ok_or(ValidationError::AccountDoesNotExist { role: Role::Seller })?;

        if !self.hasher.verify(password, &seller.password).await? {
            tracing::warn!(email = %mask_email(&email), event = "login_failed", role = "seller");
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.tokens.generate_tokens(seller.id, Role::Seller)?;
        tracing::info!(seller_id = %seller.id, event = "login_success", role = "seller");
        Ok(AuthResponse::new(Role::Seller, tokens, AccountSummary::from(&seller)))
    }

    /// Mint a new access token from a refresh token
    pub async fn refresh_token(&self, refresh_token: Option<&str>) -> DomainResult<RefreshedSession> {
        let token = refresh_token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ValidationError::MissingRefreshToken)?;

        let claims = self
            .tokens
            .verify_refresh_token(token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;
        let account_id = claims
            .account_id()
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        if self.find_account(account_id, claims.role).await?.is_none() {
            return Err(AuthError::AccountGone { role: claims.role }.into());
        }

        let access_token = self.tokens.generate_access_token(account_id, claims.role)?;
        tracing::debug!(account_id = %account_id, role = claims.role.as_str(), event = "token_refreshed");
        Ok(RefreshedSession {
            role: claims.role,
            access_token,
        })
    }

    /// Mail a password reset OTP to an existing account
    pub async fn forgot_password(&self, role: Role, request: ForgotPasswordRequest) -> DomainResult<()> {
        let email = present(&request.email)
            .map(normalize_email)
            .ok_or(ValidationError::EmailRequired)?;

        let name = match role {
            Role::User => self.users.find_by_email(&email).await?.map(|u| u.name),
            Role::Seller => self.sellers.find_by_email(&email).await?.map(|s| s.name),
        }
        .ok_or(ValidationError::AccountNotFound { role })?;

        self.otp
            .issue(&name, &email, OtpTemplate::password_reset(role))
            .await?;

        tracing::info!(email = %mask_email(&email), role = role.as_str(), event = "password_reset_requested");
        Ok(())
    }

    /// Confirm a password reset OTP
    pub async fn verify_forgot_password(
        &self,
        role: Role,
        request: VerifyResetOtpRequest,
    ) -> DomainResult<()> {
        let (Some(email), Some(otp)) = (present(&request.email), present(&request.otp)) else {
            return Err(ValidationError::EmailAndOtpRequired.into());
        };
        let email = normalize_email(email);

        self.otp.verify_otp(&email, otp).await?;
        self.otp.mark_reset_verified(&email).await?;
        tracing::info!(email = %mask_email(&email), role = role.as_str(), event = "password_reset_verified");
        Ok(())
    }

    /// Replace the password of an existing account
    ///
    /// Requires a forgot-password OTP verified for the same email. A reset
    /// refused as unchanged keeps the verification; a successful one uses it up.
    pub async fn reset_password(&self, role: Role, request: ResetPasswordRequest) -> DomainResult<()> {
        let (Some(email), Some(new_password)) =
            (present(&request.email), present(&request.new_password))
        else {
            return Err(ValidationError::EmailAndNewPasswordRequired.into());
        };
        let email = normalize_email(email);

        if !self.otp.is_reset_verified(&email).await? {
            tracing::warn!(email = %mask_email(&email), role = role.as_str(), event = "password_reset_unverified");
            return Err(ValidationError::ResetNotVerified.into());
        }

        match role {
            Role::User => {
                let mut user = self
                    .users
                    .find_by_email(&email)
                    .await?
                    .ok_or(ValidationError::AccountDoesNotExist { role })?;
                if let Some(current) = user.password.as_deref() {
                    self.ensure_changed(new_password, current).await?;
                }
                self.take_reset_verification(&email).await?;
                user.set_password(self.hasher.hash(new_password).await?);
                self.users.update(user).await?;
            }
            Role::Seller => {
                let mut seller = self
                    .sellers
                    .find_by_email(&email)
                    .await?
                    .ok_or(ValidationError::AccountDoesNotExist { role })?;
                self.ensure_changed(new_password, &seller.password).await?;
                self.take_reset_verification(&email).await?;
                seller.set_password(self.hasher.hash(new_password).await?);
                self.sellers.update(seller).await?;
            }
        }

        tracing::info!(email = %mask_email(&email), role = role.as_str(), event = "password_reset");
        Ok(())
    }

    /// Resolve an access token to the account it names
    pub async fn authenticate(&self, access_token: &str) -> DomainResult<Account> {
        let claims = self.tokens.verify_access_token(access_token)?;
        let account_id = claims
            .account_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;

        self.find_account(account_id, claims.role)
            .await?
            .ok_or_else(|| AuthError::AccountGone { role: claims.role }.into())
    }

    /// Load a user by id
    pub async fn get_user(&self, id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AuthError::AccountGone { role: Role::User }.into())
    }

    /// Load a seller by id
    pub async fn get_seller(&self, id: Uuid) -> DomainResult<Seller> {
        self.sellers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AuthError::AccountGone { role: Role::Seller }.into())
    }

    async fn find_account(&self, id: Uuid, role: Role) -> DomainResult<Option<Account>> {
        Ok(match role {
            Role::User => self.users.find_by_id(id).await?.map(Account::User),
            Role::Seller => self.sellers.find_by_id(id).await?.map(Account::Seller),
        })
    }

    async fn take_reset_verification(&self, email: &str) -> DomainResult<()> {
        if !self.otp.consume_reset_verification(email).await? {
            return Err(ValidationError::ResetNotVerified.into());
        }
        Ok(())
    }

    async fn ensure_changed(&self, new_password: &str, current_hash: &str) -> DomainResult<()> {
        if self.hasher.verify(new_password, current_hash).await? {
            return Err(ValidationError::PasswordUnchanged.into());
        }
        Ok(())
    }
}

fn login_fields(request: &LoginRequest) -> Result<(String, &str), ValidationError> {
    match (present(&request.email), present(&request.password)) {
        (Some(email), Some(password)) => Ok((normalize_email(email), password)),
        _ => Err(ValidationError::EmailAndPasswordRequired),
    }
}
