//! Process-local fallback OTP store.
//!
//! Used only when no shared-store endpoint is configured. State lives in a
//! mutex-guarded map, so consume-and-delete is atomic without external
//! infrastructure; expiry is enforced by checking `expires_at` on every read
//! and purging expired entries opportunistically on writes.
//!
//! Documented limitation of this fallback path: records do not survive a
//! process restart and are not shared across server instances.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use cg_core::domain::entities::otp_record::OtpRecord;
use cg_core::errors::{DomainResult, OtpError};
use cg_core::services::otp::{ConsumeOutcome, OtpStore};

/// What a locked consume attempt decided to do with the entry
enum ConsumeAction {
    Missing,
    Expired,
    Matched,
    Mismatch,
}

/// In-process OTP store guarded by a mutex
#[derive(Default)]
pub struct LocalOtpStore {
    records: Mutex<HashMap<String, OtpRecord>>,
}

impl LocalOtpStore {
    /// Create an empty local store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) records currently held
    pub fn live_records(&self) -> usize {
        self.records
            .lock()
            .map(|records| records.values().filter(|r| !r.is_expired()).count())
            .unwrap_or(0)
    }

    fn lock_records(&self) -> DomainResult<std::sync::MutexGuard<'_, HashMap<String, OtpRecord>>> {
        self.records.lock().map_err(|_| OtpError::Internal {
            message: "local OTP store lock poisoned".to_string(),
        })
    }
}

#[async_trait]
impl OtpStore for LocalOtpStore {
    async fn put(&self, identifier: &str, code: &str, ttl_seconds: u64) -> DomainResult<()> {
        let mut records = self.lock_records()?;

        // Opportunistic cleanup; correctness relies on the on-read check
        records.retain(|_, record| !record.is_expired());

        records.insert(
            identifier.to_string(),
            OtpRecord::new(identifier.to_string(), code.to_string(), ttl_seconds),
        );

        debug!(live = records.len(), "Stored OTP record in local store");
        Ok(())
    }

    async fn get_and_consume(
        &self,
        identifier: &str,
        submitted_code: &str,
    ) -> DomainResult<ConsumeOutcome> {
        let mut records = self.lock_records()?;

        let action = match records.get(identifier) {
            None => ConsumeAction::Missing,
            Some(record) if record.is_expired() => ConsumeAction::Expired,
            Some(record) if record.matches(submitted_code) => ConsumeAction::Matched,
            Some(_) => ConsumeAction::Mismatch,
        };

        match action {
            ConsumeAction::Missing => Ok(ConsumeOutcome::Missing),
            ConsumeAction::Expired => {
                // Expired entries read as absent, purged on contact
                records.remove(identifier);
                Ok(ConsumeOutcome::Missing)
            }
            ConsumeAction::Matched => {
                records.remove(identifier);
                Ok(ConsumeOutcome::Consumed)
            }
            ConsumeAction::Mismatch => Ok(ConsumeOutcome::Mismatch),
        }
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}
