//! Interfaces for OTP storage and delivery gateway integration

use async_trait::async_trait;

use crate::errors::DomainResult;

use super::types::ConsumeOutcome;

/// Key-value store for live OTP records, keyed by identifier.
///
/// Two interchangeable implementations exist in the infrastructure layer: a
/// Redis-backed shared store (durable, shared across processes) and an
/// in-process fallback. The backend is selected once at startup; callers
/// never observe which one is active.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Stores a fresh record for `identifier`, expiring `ttl_seconds` from
    /// now and unconditionally overwriting any existing record.
    async fn put(&self, identifier: &str, code: &str, ttl_seconds: u64) -> DomainResult<()>;

    /// Atomically reads the current record, evaluates it against
    /// `submitted_code`, and removes it on a successful match.
    ///
    /// Concurrent calls for the same identifier with the correct code must
    /// resolve to at most one [`ConsumeOutcome::Consumed`]; losers observe
    /// [`ConsumeOutcome::Missing`]. A mismatch leaves the record in place.
    async fn get_and_consume(
        &self,
        identifier: &str,
        submitted_code: &str,
    ) -> DomainResult<ConsumeOutcome>;

    /// Name of the backing store, for logging
    fn backend_name(&self) -> &'static str;
}

/// Outbound delivery channel for issued codes.
///
/// Both operations are best-effort booleans and never raise; a `false`
/// result is reported to the issuance caller as a delivery failure distinct
/// from a storage failure. Real transports live outside this crate; the
/// infrastructure layer ships a development mock.
#[async_trait]
pub trait DeliveryGateway: Send + Sync {
    /// Send an email; returns whether the gateway accepted the message
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> bool;

    /// Send an SMS; returns whether the gateway accepted the message
    async fn send_sms(&self, phone: &str, message: &str) -> bool;
}
