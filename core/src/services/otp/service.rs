//! OTP manager service implementation

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing;

use crate::errors::{DomainResult, OtpError};

use super::config::OtpServiceConfig;
use super::generator::generate_code_with_length;
use super::traits::{DeliveryGateway, OtpStore};
use super::types::{Channel, DeliveryStatus, IssueResult, VerifyOutcome};

/// Manager for the OTP lifecycle: generation, storage, delivery, and
/// single-use verification.
///
/// The store backend is injected once at construction and never re-evaluated
/// per call, so both code paths cannot drift mid-flight. All store faults are
/// translated to the domain error taxonomy here; nothing below this boundary
/// reaches callers unhandled.
pub struct OtpService<S: OtpStore, D: DeliveryGateway> {
    /// Store holding live OTP records
    store: Arc<S>,
    /// Gateway that transmits codes to users
    gateway: Arc<D>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<S: OtpStore, D: DeliveryGateway> OtpService<S, D> {
    /// Create a new OTP manager
    pub fn new(store: Arc<S>, gateway: Arc<D>, config: OtpServiceConfig) -> Self {
        Self {
            store,
            gateway,
            config,
        }
    }

    /// Issue a fresh code for `identifier` and deliver it over `channel`.
    ///
    /// The record is stored first and delivery happens second; a gateway
    /// failure is reported as [`DeliveryStatus::Failed`] inside the result
    /// rather than rolling back the record, so re-issuance remains the
    /// recovery path for undelivered codes. Any still-live record for the
    /// identifier is superseded unconditionally.
    pub async fn issue(&self, identifier: &str, channel: Channel) -> DomainResult<IssueResult> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(OtpError::Validation {
                message: "identifier must not be empty".to_string(),
            });
        }

        let code = generate_code_with_length(self.config.code_length);
        let expires_at = Utc::now() + Duration::seconds(self.config.code_ttl_seconds as i64);

        self.store
            .put(identifier, &code, self.config.code_ttl_seconds)
            .await?;

        tracing::info!(
            identifier = %mask_identifier(identifier),
            backend = self.store.backend_name(),
            event = "otp_issued",
            ttl_seconds = self.config.code_ttl_seconds,
            "Issued one-time passcode"
        );

        let delivered = self.deliver(identifier, &code, channel).await;
        let delivery = if delivered {
            DeliveryStatus::Delivered
        } else {
            tracing::warn!(
                identifier = %mask_identifier(identifier),
                channel = ?channel,
                event = "otp_delivery_failed",
                "Delivery gateway rejected the message; stored code remains live"
            );
            DeliveryStatus::Failed
        };

        Ok(IssueResult {
            code,
            expires_at,
            delivery,
        })
    }

    /// Verify a submitted code for `identifier`.
    ///
    /// Empty input is a [`VerifyOutcome::BadRequest`] caught before any
    /// store access. Otherwise this is a single atomic consume attempt
    /// against the store - no retries; a failed verification is final for
    /// that attempt and the caller may re-issue for another chance.
    pub async fn verify(&self, identifier: &str, submitted_code: &str) -> DomainResult<VerifyOutcome> {
        let identifier = identifier.trim();
        let submitted_code = submitted_code.trim();

        if identifier.is_empty() || submitted_code.is_empty() {
            tracing::warn!(
                event = "otp_bad_request",
                "Verification rejected: missing identifier or code"
            );
            return Ok(VerifyOutcome::BadRequest);
        }

        let outcome: VerifyOutcome = self
            .store
            .get_and_consume(identifier, submitted_code)
            .await?
            .into();

        match outcome {
            VerifyOutcome::Success => {
                tracing::info!(
                    identifier = %mask_identifier(identifier),
                    backend = self.store.backend_name(),
                    event = "otp_verified",
                    "One-time passcode verified and consumed"
                );
            }
            failure => {
                tracing::warn!(
                    identifier = %mask_identifier(identifier),
                    backend = self.store.backend_name(),
                    event = "otp_verification_failed",
                    outcome = failure.tag(),
                    "One-time passcode verification failed"
                );
            }
        }

        Ok(outcome)
    }

    /// Dispatch the code over the requested channel.
    ///
    /// The code travels only inside the outbound message body, never through
    /// the logging layer.
    async fn deliver(&self, identifier: &str, code: &str, channel: Channel) -> bool {
        let ttl_minutes = self.config.code_ttl_seconds / 60;
        match channel {
            Channel::Email => {
                let subject = "Your verification code";
                let html = format!(
                    "<p>Your verification code is <strong>{}</strong>. \
                     It expires in {} minutes.</p>",
                    code, ttl_minutes
                );
                self.gateway.send_email(identifier, subject, &html).await
            }
            Channel::Sms => {
                let message = format!(
                    "Your verification code is: {}. This code will expire in {} minutes.",
                    code, ttl_minutes
                );
                self.gateway.send_sms(identifier, &message).await
            }
        }
    }
}

/// Mask an identifier for logging.
///
/// Emails keep the first character of the local part and the full domain;
/// other identifiers (phone numbers) show only the last four characters.
/// Masking counts characters, not bytes, so arbitrary caller-supplied
/// identifiers never split a multibyte character.
pub(crate) fn mask_identifier(identifier: &str) -> String {
    if let Some((local, domain)) = identifier.split_once('@') {
        match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        }
    } else {
        let chars: Vec<char> = identifier.chars().collect();
        if chars.len() <= 4 {
            "****".to_string()
        } else {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("***{}", tail)
        }
    }
}
