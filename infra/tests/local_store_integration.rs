//! Integration tests for the OTP manager over the process-local store

use std::sync::Arc;

use cg_core::services::otp::{
    Channel, DeliveryStatus, OtpService, OtpServiceConfig, OtpStore, VerifyOutcome,
};
use cg_infra::cache::{select_store, LocalOtpStore, SelectedStore};
use cg_infra::delivery::MockDeliveryGateway;

fn local_service() -> OtpService<LocalOtpStore, MockDeliveryGateway> {
    OtpService::new(
        Arc::new(LocalOtpStore::new()),
        Arc::new(MockDeliveryGateway::with_options(false, false)),
        OtpServiceConfig::default(),
    )
}

/// Scripted issue/verify sequence used for backend parity checks.
///
/// The Redis integration test runs the identical script; both backends must
/// emit the same sequence of result tags.
async fn run_parity_script<S: OtpStore>(
    service: &OtpService<S, MockDeliveryGateway>,
    identifier: &str,
) -> Vec<&'static str> {
    let mut tags = Vec::new();

    let first = service.issue(identifier, Channel::Email).await.unwrap();
    let wrong = if first.code == "000000" { "111111" } else { "000000" };

    tags.push(service.verify(identifier, wrong).await.unwrap().tag());
    tags.push(service.verify(identifier, &first.code).await.unwrap().tag());
    tags.push(service.verify(identifier, &first.code).await.unwrap().tag());

    let superseded = service.issue(identifier, Channel::Email).await.unwrap();
    let current = service.issue(identifier, Channel::Email).await.unwrap();

    tags.push(service.verify(identifier, &superseded.code).await.unwrap().tag());
    tags.push(service.verify(identifier, &current.code).await.unwrap().tag());
    tags.push(service.verify("", "123456").await.unwrap().tag());

    tags
}

fn expected_parity_tags() -> Vec<&'static str> {
    vec![
        "invalid_or_expired", // wrong guess
        "success",            // legitimate code survives the wrong guess
        "invalid_or_expired", // replay after consumption
        "invalid_or_expired", // superseded code
        "success",            // newest code
        "bad_request",        // empty identifier
    ]
}

#[tokio::test]
async fn test_end_to_end_issue_verify_replay() {
    let service = local_service();

    let issued = service.issue("user@example.com", Channel::Email).await.unwrap();
    assert_eq!(issued.delivery, DeliveryStatus::Delivered);

    let verified = service.verify("user@example.com", &issued.code).await.unwrap();
    assert_eq!(verified, VerifyOutcome::Success);

    let replayed = service.verify("user@example.com", &issued.code).await.unwrap();
    assert_eq!(replayed, VerifyOutcome::NotFoundOrExpired);
}

#[tokio::test]
async fn test_parity_script_over_local_store() {
    let service = local_service();

    let tags = run_parity_script(&service, "parity@example.com").await;

    assert_eq!(tags, expected_parity_tags());
}

#[tokio::test]
async fn test_selected_store_without_endpoint_behaves_like_local() {
    let store: SelectedStore = select_store(None).await.unwrap();
    let service = OtpService::new(
        Arc::new(store),
        Arc::new(MockDeliveryGateway::with_options(false, false)),
        OtpServiceConfig::default(),
    );

    let tags = run_parity_script(&service, "fallback@example.com").await;

    assert_eq!(tags, expected_parity_tags());
}

#[tokio::test]
async fn test_concurrent_verify_single_winner_through_service() {
    let service = Arc::new(local_service());
    let issued = service.issue("race@example.com", Channel::Email).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..10 {
        let service = Arc::clone(&service);
        let code = issued.code.clone();
        handles.push(tokio::spawn(async move {
            service.verify("race@example.com", &code).await.unwrap()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_success() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
}

#[tokio::test]
async fn test_delivery_failure_reported_but_code_stored() {
    let service = OtpService::new(
        Arc::new(LocalOtpStore::new()),
        Arc::new(MockDeliveryGateway::with_options(false, true)),
        OtpServiceConfig::default(),
    );

    let issued = service.issue("+61412345678", Channel::Sms).await.unwrap();
    assert_eq!(issued.delivery, DeliveryStatus::Failed);

    // The record was stored before the gateway was consulted
    let verified = service.verify("+61412345678", &issued.code).await.unwrap();
    assert_eq!(verified, VerifyOutcome::Success);
}
