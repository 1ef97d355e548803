//! Business services

pub mod otp;

pub use otp::*;
