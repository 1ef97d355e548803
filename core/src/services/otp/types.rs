//! Types for OTP issuance and verification results

use chrono::{DateTime, Utc};

/// Delivery channel for an issued code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Deliver the code by email
    Email,
    /// Deliver the code by SMS
    Sms,
}

/// Store-level outcome of a consume attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeOutcome {
    /// The submitted code matched and the record was removed
    Consumed,
    /// No live record for the identifier (never issued, consumed, or expired)
    Missing,
    /// A record exists but was already consumed by a prior successful verify
    AlreadyUsed,
    /// A live record exists but the submitted code differs; the record stays
    Mismatch,
}

/// Whether the delivery gateway accepted the outbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The gateway accepted the message
    Delivered,
    /// The gateway reported failure; the stored record is not rolled back
    /// and the caller may retry issuance or pick another channel
    Failed,
}

/// Result of issuing a code
#[derive(Debug, Clone)]
pub struct IssueResult {
    /// The generated code, for handoff to callers that manage delivery
    /// themselves
    pub code: String,
    /// When the code stops being verifiable
    pub expires_at: DateTime<Utc>,
    /// Outcome of the delivery gateway call
    pub delivery: DeliveryStatus,
}

/// Caller-visible outcome of a verification attempt.
///
/// The taxonomy is deliberately more granular than anything shown to end
/// users: granularity exists for logging, while [`public_message`] collapses
/// every failure to the same generic text so responses leak nothing useful
/// to a guessing attacker.
///
/// [`public_message`]: VerifyOutcome::public_message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The code matched and was consumed
    Success,
    /// Identifier or code was empty; no store was touched
    BadRequest,
    /// Never issued, already consumed, or TTL elapsed - the same signal for
    /// all three causes
    NotFoundOrExpired,
    /// The record was already consumed and the backend retains used records
    AlreadyUsed,
    /// A live record exists but the submitted code differs; the original
    /// code remains consumable
    CodeMismatch,
}

impl VerifyOutcome {
    /// Whether this outcome is a successful verification
    pub fn is_success(&self) -> bool {
        matches!(self, VerifyOutcome::Success)
    }

    /// Tag for the request layer to map onto transport status codes.
    ///
    /// `NotFoundOrExpired` and `CodeMismatch` share a tag so callers cannot
    /// tell whether an identifier has a live code.
    pub fn tag(&self) -> &'static str {
        match self {
            VerifyOutcome::Success => "success",
            VerifyOutcome::BadRequest => "bad_request",
            VerifyOutcome::NotFoundOrExpired | VerifyOutcome::CodeMismatch => "invalid_or_expired",
            VerifyOutcome::AlreadyUsed => "already_used",
        }
    }

    /// Generic end-user message; identical for every failure cause
    pub fn public_message(&self) -> &'static str {
        match self {
            VerifyOutcome::Success => "code verified",
            VerifyOutcome::BadRequest => "identifier and code are required",
            _ => "invalid or expired code",
        }
    }
}

impl From<ConsumeOutcome> for VerifyOutcome {
    fn from(outcome: ConsumeOutcome) -> Self {
        match outcome {
            ConsumeOutcome::Consumed => VerifyOutcome::Success,
            ConsumeOutcome::Missing => VerifyOutcome::NotFoundOrExpired,
            ConsumeOutcome::AlreadyUsed => VerifyOutcome::AlreadyUsed,
            ConsumeOutcome::Mismatch => VerifyOutcome::CodeMismatch,
        }
    }
}
