//! Delivery module - outbound code transport.
//!
//! Real transports (email providers, SMS aggregators) live outside this
//! repository; they plug in through the [`DeliveryGateway`] trait from the
//! core crate. This module ships the development mock.
//!
//! [`DeliveryGateway`]: cg_core::services::otp::DeliveryGateway

mod mock;

pub use mock::MockDeliveryGateway;

/// Mask an identifier for logging, showing only the last four characters
/// of a phone number or the first character of an email's local part.
/// Masking counts characters, not bytes, so arbitrary caller-supplied
/// identifiers never split a multibyte character.
pub fn mask_identifier(identifier: &str) -> String {
    if let Some((local, domain)) = identifier.split_once('@') {
        match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        }
    } else {
        let chars: Vec<char> = identifier.chars().collect();
        if chars.len() <= 4 {
            "****".to_string()
        } else {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("***{}", tail)
        }
    }
}
