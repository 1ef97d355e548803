//! Domain-specific error types for OTP issuance and verification.
//!
//! User-level verification outcomes (wrong code, expired code, replayed
//! code) are not errors; they travel as [`VerifyOutcome`] values so the
//! request layer can map them to response tags. The variants here cover
//! input validation and infrastructure faults only - nothing below the
//! manager boundary propagates as an unhandled fault past it.
//!
//! [`VerifyOutcome`]: crate::services::otp::VerifyOutcome

use thiserror::Error;

/// Errors surfaced by the OTP manager and its store backends
#[derive(Error, Debug)]
pub enum OtpError {
    /// Issuance input failed validation before touching any store
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// The configured store backend could not be reached.
    ///
    /// This is an infrastructure fault and maps to `internal_error` at the
    /// request layer, never to "invalid code".
    #[error("Store backend unavailable: {message}")]
    BackendUnavailable { message: String },

    /// Serialization failures, poisoned locks, and other internal faults
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, OtpError>;
