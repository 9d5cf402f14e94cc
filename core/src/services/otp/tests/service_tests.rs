//! Unit tests for the OTP service

use bz_shared::config::OtpConfig;
use std::sync::Arc;
use tokio::time::{advance, Duration};

use crate::errors::{DomainError, ValidationError};
use crate::services::otp::{keys, KeyValueStore, OtpService, OtpTemplate};

use super::mocks::{MockStore, RecordingMailer};

const EMAIL: &str = "a@b.com";

fn service_with(store: &MockStore, mailer: &RecordingMailer) -> OtpService {
    OtpService::new(
        Arc::new(store.clone()),
        Arc::new(mailer.clone()),
        OtpConfig::default(),
    )
}

fn validation(err: DomainError) -> ValidationError {
    match err {
        DomainError::Validation(v) => v,
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_code_range() {
    for _ in 0..500 {
        let code = OtpService::generate_code();
        assert_eq!(code.len(), 4);
        let value: u32 = code.parse().unwrap();
        assert!((1000..=9999).contains(&value));
    }
}

#[tokio::test(start_paused = true)]
async fn test_send_otp_stores_code_and_cooldown() {
    let store = MockStore::new();
    let mailer = RecordingMailer::new();
    let service = service_with(&store, &mailer);

    service
        .send_otp("Ann", EMAIL, OtpTemplate::UserActivationMail)
        .await
        .unwrap();

    let mail = mailer.last().unwrap();
    assert_eq!(mail.to, EMAIL);
    assert_eq!(mail.subject, "Verify Your Email");
    assert_eq!(mail.template, OtpTemplate::UserActivationMail);
    assert_eq!(mail.data["name"], "Ann");

    let code = mailer.last_code_for(EMAIL).unwrap();
    assert_eq!(store.value(&keys::otp(EMAIL)), Some(code));
    assert_eq!(store.ttl(&keys::otp(EMAIL)), Some(300));
    assert_eq!(store.ttl(&keys::cooldown(EMAIL)), Some(60));
}

#[tokio::test]
async fn test_send_otp_mail_failure_stores_nothing() {
    let store = MockStore::new();
    let mailer = RecordingMailer::failing();
    let service = service_with(&store, &mailer);

    let err = service
        .send_otp("Ann", EMAIL, OtpTemplate::UserActivationMail)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Internal { .. }));
    assert!(store.value(&keys::otp(EMAIL)).is_none());
    assert!(store.value(&keys::cooldown(EMAIL)).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_cooldown_blocks_then_expires() {
    let store = MockStore::new();
    let mailer = RecordingMailer::new();
    let service = service_with(&store, &mailer);

    service.issue("Ann", EMAIL, OtpTemplate::UserActivationMail).await.unwrap();

    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpCooldown);

    advance(Duration::from_secs(61)).await;
    service.check_restrictions(EMAIL).await.unwrap();
}

#[tokio::test]
async fn test_restrictions_checked_in_order() {
    let store = MockStore::new();
    let mailer = RecordingMailer::new();
    let service = service_with(&store, &mailer);

    store.set_with_ttl(&keys::cooldown(EMAIL), "true", 60).await.unwrap();
    store.set_with_ttl(&keys::spam_lock(EMAIL), "locked", 3600).await.unwrap();
    store.set_with_ttl(&keys::lock(EMAIL), "locked", 1800).await.unwrap();

    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpLocked);

    store.remove(&keys::lock(EMAIL));
    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpSpamLocked);

    store.remove(&keys::spam_lock(EMAIL));
    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpCooldown);
}

#[tokio::test(start_paused = true)]
async fn test_third_request_in_window_sets_spam_lock() {
    let store = MockStore::new();
    let mailer = RecordingMailer::new();
    let service = service_with(&store, &mailer);

    service.track_request(EMAIL).await.unwrap();
    service.track_request(EMAIL).await.unwrap();
    assert_eq!(store.value(&keys::request_count(EMAIL)).as_deref(), Some("2"));
    assert_eq!(store.ttl(&keys::request_count(EMAIL)), Some(3600));

    let err = service.track_request(EMAIL).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpRequestLimitReached);
    assert_eq!(store.ttl(&keys::spam_lock(EMAIL)), Some(3600));

    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpSpamLocked);
}

#[tokio::test(start_paused = true)]
async fn test_issue_flow_spam_locks_after_cooldowns() {
    let store = MockStore::new();
    let mailer = RecordingMailer::new();
    let service = service_with(&store, &mailer);

    service.issue("Ann", EMAIL, OtpTemplate::UserActivationMail).await.unwrap();
    advance(Duration::from_secs(61)).await;
    service.issue("Ann", EMAIL, OtpTemplate::UserActivationMail).await.unwrap();
    advance(Duration::from_secs(61)).await;

    let err = service
        .issue("Ann", EMAIL, OtpTemplate::UserActivationMail)
        .await
        .unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpRequestLimitReached);
    assert_eq!(mailer.sent_count(), 2);

    // Window and spam lock both lapse after an hour
    advance(Duration::from_secs(3601)).await;
    service.issue("Ann", EMAIL, OtpTemplate::UserActivationMail).await.unwrap();
}

#[tokio::test]
async fn test_verify_correct_code_clears_state() {
    let store = MockStore::new();
    let mailer = RecordingMailer::new();
    let service = service_with(&store, &mailer);

    service.send_otp("Ann", EMAIL, OtpTemplate::UserActivationMail).await.unwrap();
    let code = mailer.last_code_for(EMAIL).unwrap();

    let _ = service.verify_otp(EMAIL, "0000").await;
    assert_eq!(store.value(&keys::attempts(EMAIL)).as_deref(), Some("1"));

    service.verify_otp(EMAIL, &code).await.unwrap();
    assert!(store.value(&keys::otp(EMAIL)).is_none());
    assert!(store.value(&keys::attempts(EMAIL)).is_none());

    // Single use
    let err = service.verify_otp(EMAIL, &code).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpExpired);
}

#[tokio::test]
async fn test_verify_without_code_is_expired() {
    let store = MockStore::new();
    let service = service_with(&store, &RecordingMailer::new());

    let err = service.verify_otp(EMAIL, "1234").await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpExpired);
    assert!(store.value(&keys::attempts(EMAIL)).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_code_expires_after_five_minutes() {
    let store = MockStore::new();
    let mailer = RecordingMailer::new();
    let service = service_with(&store, &mailer);

    service.send_otp("Ann", EMAIL, OtpTemplate::UserActivationMail).await.unwrap();
    let code = mailer.last_code_for(EMAIL).unwrap();

    advance(Duration::from_secs(301)).await;
    let err = service.verify_otp(EMAIL, &code).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpExpired);
}

#[tokio::test(start_paused = true)]
async fn test_three_wrong_codes_lock_account() {
    let store = MockStore::new();
    let mailer = RecordingMailer::new();
    let service = service_with(&store, &mailer);

    service.send_otp("Ann", EMAIL, OtpTemplate::UserActivationMail).await.unwrap();
    let code = mailer.last_code_for(EMAIL).unwrap();
    let wrong = if code == "1000" { "1001" } else { "1000" };

    let err = service.verify_otp(EMAIL, wrong).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpIncorrect { remaining: 2 });
    let err = service.verify_otp(EMAIL, wrong).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpIncorrect { remaining: 1 });
    assert_eq!(store.value(&keys::attempts(EMAIL)).as_deref(), Some("2"));
    assert_eq!(store.ttl(&keys::attempts(EMAIL)), Some(300));

    let err = service.verify_otp(EMAIL, wrong).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Too many failed attempts! Account locked for 30 minutes."
    );
    assert_eq!(validation(err), ValidationError::OtpAttemptsExceeded { minutes: 30 });
    assert!(store.value(&keys::otp(EMAIL)).is_none());
    assert!(store.value(&keys::attempts(EMAIL)).is_none());
    assert_eq!(store.ttl(&keys::lock(EMAIL)), Some(1800));

    // Locked: the correct code is gone and new codes are refused
    let err = service.verify_otp(EMAIL, &code).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpExpired);
    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::OtpLocked);
}

#[tokio::test]
async fn test_store_failure_is_internal() {
    let store = MockStore::failing();
    let service = service_with(&store, &RecordingMailer::new());

    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_reset_verification_taken_once() {
    let store = MockStore::new();
    let service = service_with(&store, &RecordingMailer::new());

    assert!(!service.is_reset_verified(EMAIL).await.unwrap());
    assert!(!service.consume_reset_verification(EMAIL).await.unwrap());

    service.mark_reset_verified(EMAIL).await.unwrap();
    assert_eq!(store.ttl(&keys::reset_verified(EMAIL)), Some(300));
    assert!(service.is_reset_verified(EMAIL).await.unwrap());

    assert!(service.consume_reset_verification(EMAIL).await.unwrap());
    assert!(!service.consume_reset_verification(EMAIL).await.unwrap());
    assert!(!service.is_reset_verified(EMAIL).await.unwrap());

    service.mark_reset_verified(EMAIL).await.unwrap();
    advance(Duration::from_secs(300)).await;
    assert!(!service.consume_reset_verification(EMAIL).await.unwrap());
}
