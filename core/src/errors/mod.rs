//! Error types for the CodeGate domain layer

pub mod domain_error;

pub use domain_error::{DomainResult, OtpError};
