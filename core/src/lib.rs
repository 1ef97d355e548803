//! # CodeGate Core
//!
//! Core domain layer for the CodeGate backend. This crate contains the OTP
//! record entity, the code generator, the store and delivery gateway
//! interfaces, the OTP manager service, and the domain error types that the
//! infrastructure layer implements against.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
