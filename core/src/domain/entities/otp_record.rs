//! One-time passcode record entity.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// Length of a generated one-time passcode
pub const CODE_LENGTH: usize = 6;

/// Time-to-live for issued codes in seconds (10 minutes)
pub const CODE_TTL_SECONDS: u64 = 600;

/// A live one-time passcode bound to a user identifier.
///
/// The identifier is the subject key (email address or phone number in
/// whatever normalization the caller applies); at most one live record
/// exists per identifier, and issuing a new code replaces any prior record
/// unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Subject key the code is bound to (email or phone number)
    pub identifier: String,

    /// The secret code to match against user submission
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp past which the code is no longer valid
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a record for `identifier` holding `code`, expiring
    /// `ttl_seconds` from now.
    pub fn new(identifier: String, code: String, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(ttl_seconds as i64);

        Self {
            identifier,
            code,
            created_at: now,
            expires_at,
        }
    }

    /// Checks if the code's TTL has elapsed.
    ///
    /// Stores must treat an expired record as absent on every read; passive
    /// cleanup alone is not sufficient.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Compares a submitted code against the stored code in constant time.
    pub fn matches(&self, submitted_code: &str) -> bool {
        if self.code.len() != submitted_code.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), submitted_code.as_bytes())
    }

    /// Gets the time remaining until expiration, or zero if expired.
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration as StdDuration;

    #[test]
    fn test_new_record() {
        let record = OtpRecord::new(
            "user@example.com".to_string(),
            "482913".to_string(),
            CODE_TTL_SECONDS,
        );

        assert_eq!(record.identifier, "user@example.com");
        assert_eq!(record.code, "482913");
        assert!(!record.is_expired());
        assert_eq!(
            record.expires_at,
            record.created_at + Duration::seconds(CODE_TTL_SECONDS as i64)
        );
    }

    #[test]
    fn test_matches_is_exact() {
        let record = OtpRecord::new("+61412345678".to_string(), "040500".to_string(), 600);

        assert!(record.matches("040500"));
        assert!(!record.matches("040501"));
        assert!(!record.matches("0405"));
        assert!(!record.matches(""));
    }

    #[test]
    fn test_is_expired_after_ttl() {
        let record = OtpRecord::new("user@example.com".to_string(), "123456".to_string(), 0);

        thread::sleep(StdDuration::from_millis(10));

        assert!(record.is_expired());
        assert_eq!(record.time_until_expiration(), Duration::zero());
    }

    #[test]
    fn test_time_until_expiration() {
        let record = OtpRecord::new("user@example.com".to_string(), "123456".to_string(), 600);

        let remaining = record.time_until_expiration();
        assert!(remaining <= Duration::seconds(600));
        assert!(remaining > Duration::seconds(590));
    }

    #[test]
    fn test_serialization() {
        let record = OtpRecord::new("user@example.com".to_string(), "000042".to_string(), 600);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: OtpRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
