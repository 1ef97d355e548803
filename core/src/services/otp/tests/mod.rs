//! Tests for the OTP manager service
