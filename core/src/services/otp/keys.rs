//! Cache key layout for per-email OTP state

/// Current valid code
pub fn otp(email: &str) -> String {
    format!("otp:{}", email)
}

/// Blocks re-send right after a send
pub fn cooldown(email: &str) -> String {
    format!("otp_cooldown:{}", email)
}

/// Sends counted in the current window
pub fn request_count(email: &str) -> String {
    format!("otp_request_count:{}", email)
}

/// Blocks all sends after too many requests
pub fn spam_lock(email: &str) -> String {
    format!("otp_spam_lock:{}", email)
}

/// Failed verification attempts
pub fn attempts(email: &str) -> String {
    format!("otp_attempts:{}", email)
}

/// Blocks all issuance after too many failed verifications
pub fn lock(email: &str) -> String {
    format!("otp_lock:{}", email)
}

/// Set by a verified forgot-password OTP; one reset may consume it
pub fn reset_verified(email: &str) -> String {
    format!("otp_reset_verified:{}", email)
}
