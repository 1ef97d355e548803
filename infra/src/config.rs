//! Configuration management for infrastructure services.
//!
//! Backend selection for the OTP store is driven by a single environment
//! signal: a `REDIS_URL` that is present selects the shared Redis store, an
//! absent one selects the process-local fallback. No other flags exist.

use serde::{Deserialize, Serialize};

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,
    /// Connection pool size
    pub pool_size: u32,
    /// Default TTL for cache entries in seconds
    pub default_ttl: u64,
}

impl CacheConfig {
    /// Create a new cache configuration with the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool_size: 10,
            default_ttl: 600,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// Returns `None` when no `REDIS_URL` is set, which callers treat as the
    /// signal to fall back to the process-local store.
    pub fn from_env() -> Option<Self> {
        dotenvy::dotenv().ok();

        let url = std::env::var("REDIS_URL").ok()?;
        let pool_size = std::env::var("REDIS_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Some(Self {
            url,
            pool_size,
            default_ttl: 600,
        })
    }
}
