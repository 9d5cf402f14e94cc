//! bcrypt password hashing on the blocking pool

use crate::errors::{DomainError, DomainResult};

/// Salted bcrypt hashing and comparison
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::with_cost(10)
    }
}

impl PasswordHasher {
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    pub async fn hash(&self, plain: &str) -> DomainResult<String> {
        let plain = plain.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    /// Compare a plaintext password with a stored hash
    ///
    /// A malformed hash compares as a mismatch.
    pub async fn verify(&self, plain: &str, hash: &str) -> DomainResult<bool> {
        let plain = plain.to_owned();
        let hash = hash.to_owned();
        let result = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?;

        match result {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!(error = %e, event = "password_hash_invalid", "Stored password hash could not be parsed");
                Ok(false)
            }
        }
    }
}
