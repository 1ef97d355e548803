//! Domain layer - entities for the OTP lifecycle

pub mod entities;

pub use entities::*;
