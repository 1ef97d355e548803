//! Redis-backed shared OTP store.
//!
//! Records live under namespaced keys (`otp:<identifier>`) as a small JSON
//! structure with Redis' native per-key expiration supplying the TTL. The
//! consume step runs as a Lua script so read-evaluate-delete is a single
//! atomic server-side operation: two racing verifies for the same identifier
//! can never both observe a match.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use cg_core::errors::{DomainResult, OtpError};
use cg_core::services::otp::{ConsumeOutcome, OtpStore};

use crate::config::CacheConfig;
use crate::InfrastructureError;

use super::redis_client::RedisClient;

/// Key namespace for OTP records
const OTP_KEY_PREFIX: &str = "otp";

/// Atomic consume script: read the record, compare the submitted code, and
/// delete only on a match. Status strings map onto [`ConsumeOutcome`].
const CONSUME_SCRIPT: &str = r#"
local raw = redis.call('GET', KEYS[1])
if not raw then
  return 'missing'
end
local record = cjson.decode(raw)
if record.used then
  return 'used'
end
if record.code == ARGV[1] then
  redis.call('DEL', KEYS[1])
  return 'consumed'
end
return 'mismatch'
"#;

/// Persisted record format on the shared store.
///
/// This implementation deletes records on successful consumption, so it only
/// ever writes `used = false`; the flag is still honored on read so records
/// written by deployments that mark rather than delete surface as
/// [`ConsumeOutcome::AlreadyUsed`] instead of being consumable twice.
#[derive(Debug, Serialize, Deserialize)]
struct StoredOtp {
    code: String,
    used: bool,
}

/// Shared OTP store backed by Redis
pub struct RedisOtpStore {
    client: RedisClient,
}

impl RedisOtpStore {
    /// Wrap an existing Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Connect to Redis and build the store
    pub async fn connect(config: CacheConfig) -> Result<Self, InfrastructureError> {
        let client = RedisClient::new(config).await?;
        Ok(Self::new(client))
    }

    /// Namespaced key for an identifier's record
    fn otp_key(identifier: &str) -> String {
        format!("{}:{}", OTP_KEY_PREFIX, identifier)
    }
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn put(&self, identifier: &str, code: &str, ttl_seconds: u64) -> DomainResult<()> {
        let key = Self::otp_key(identifier);
        let record = StoredOtp {
            code: code.to_string(),
            used: false,
        };

        let json = serde_json::to_string(&record).map_err(|e| OtpError::Internal {
            message: format!("Failed to serialize OTP record: {}", e),
        })?;

        // SETEX overwrites unconditionally, superseding any live record
        self.client
            .set_with_expiry(&key, &json, ttl_seconds)
            .await
            .map_err(|e| OtpError::BackendUnavailable {
                message: format!("Failed to store OTP record: {}", e),
            })
    }

    async fn get_and_consume(
        &self,
        identifier: &str,
        submitted_code: &str,
    ) -> DomainResult<ConsumeOutcome> {
        let key = Self::otp_key(identifier);

        let status = self
            .client
            .eval_script(CONSUME_SCRIPT, &key, submitted_code)
            .await
            .map_err(|e| OtpError::BackendUnavailable {
                message: format!("Failed to run consume script: {}", e),
            })?;

        debug!(status = %status, "Consume script completed");

        match status.as_str() {
            "consumed" => Ok(ConsumeOutcome::Consumed),
            "missing" => Ok(ConsumeOutcome::Missing),
            "used" => Ok(ConsumeOutcome::AlreadyUsed),
            "mismatch" => Ok(ConsumeOutcome::Mismatch),
            other => Err(OtpError::Internal {
                message: format!("Unexpected consume script status: {}", other),
            }),
        }
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
