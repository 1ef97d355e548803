//! OTP manager module
//!
//! This module provides the complete one-time passcode workflow:
//! - Code generation from the OS CSPRNG
//! - Storage with TTL-based expiration through the [`OtpStore`] interface
//! - Single-use consumption with replay prevention
//! - Best-effort delivery through the [`DeliveryGateway`] interface

mod config;
mod generator;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use generator::{generate_code, generate_code_with_length};
pub use service::OtpService;
pub use traits::{DeliveryGateway, OtpStore};
pub use types::{Channel, ConsumeOutcome, DeliveryStatus, IssueResult, VerifyOutcome};
