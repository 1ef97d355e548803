//! Configuration for the OTP manager service

use crate::domain::entities::otp_record::{CODE_LENGTH, CODE_TTL_SECONDS};

/// Configuration for the OTP manager service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of seconds before an issued code expires
    pub code_ttl_seconds: u64,
    /// Number of digits in a generated code
    pub code_length: usize,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: CODE_TTL_SECONDS,
            code_length: CODE_LENGTH,
        }
    }
}
