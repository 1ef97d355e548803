//! Cache module - Redis client and the two OTP store backends.
//!
//! The backend is a deployment-time choice resolved exactly once at process
//! start by [`select_store`]; callers hold the resulting [`SelectedStore`]
//! and never branch on the backend per call.

mod local_store;
mod redis_client;
mod redis_store;

pub use local_store::LocalOtpStore;
pub use redis_client::RedisClient;
pub use redis_store::RedisOtpStore;

use async_trait::async_trait;
use tracing::{info, warn};

use cg_core::errors::DomainResult;
use cg_core::services::otp::{ConsumeOutcome, OtpStore};

use crate::config::CacheConfig;
use crate::InfrastructureError;

/// The store backend chosen at startup
pub enum SelectedStore {
    /// Shared Redis store, durable and visible to all server processes
    Redis(RedisOtpStore),
    /// Process-local fallback, used when no shared endpoint is configured
    Local(LocalOtpStore),
}

#[async_trait]
impl OtpStore for SelectedStore {
    async fn put(&self, identifier: &str, code: &str, ttl_seconds: u64) -> DomainResult<()> {
        match self {
            SelectedStore::Redis(store) => store.put(identifier, code, ttl_seconds).await,
            SelectedStore::Local(store) => store.put(identifier, code, ttl_seconds).await,
        }
    }

    async fn get_and_consume(
        &self,
        identifier: &str,
        submitted_code: &str,
    ) -> DomainResult<ConsumeOutcome> {
        match self {
            SelectedStore::Redis(store) => store.get_and_consume(identifier, submitted_code).await,
            SelectedStore::Local(store) => store.get_and_consume(identifier, submitted_code).await,
        }
    }

    fn backend_name(&self) -> &'static str {
        match self {
            SelectedStore::Redis(store) => store.backend_name(),
            SelectedStore::Local(store) => store.backend_name(),
        }
    }
}

/// Select and construct the OTP store backend from configuration.
///
/// A present shared-store endpoint selects Redis; an absent one selects the
/// in-process fallback. A configured-but-unreachable Redis is an error, not
/// a silent fallback: the operator asked for a shared store and a quiet
/// downgrade would split state across processes.
pub async fn select_store(
    config: Option<CacheConfig>,
) -> Result<SelectedStore, InfrastructureError> {
    match config {
        Some(config) => {
            let store = RedisOtpStore::connect(config).await?;
            info!(backend = "redis", "Using shared Redis OTP store");
            Ok(SelectedStore::Redis(store))
        }
        None => {
            warn!(
                backend = "local",
                "No shared store endpoint configured; using process-local OTP store. \
                 Records will not survive restarts and are not shared across instances"
            );
            Ok(SelectedStore::Local(LocalOtpStore::new()))
        }
    }
}
