//! Domain entities

pub mod otp_record;

pub use otp_record::{OtpRecord, CODE_LENGTH, CODE_TTL_SECONDS};
