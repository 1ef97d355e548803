//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the CodeGate backend.
//! It provides the two interchangeable OTP store backends (a Redis-backed
//! shared store and an in-process fallback) plus startup backend selection
//! and a mock delivery gateway for development.

// Re-export core types for convenience
pub use cg_core::errors::*;

/// Cache module - Redis client and the two OTP store backends
pub mod cache;

/// Configuration module for infrastructure services
pub mod config;

/// Delivery module - outbound code transport
pub mod delivery;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
