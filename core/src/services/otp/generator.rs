//! One-time code generation.
//!
//! Codes are drawn from the OS CSPRNG (`OsRng`), never from a
//! general-purpose pseudo-random generator. If the OS randomness source is
//! unavailable, `OsRng` aborts the process; no weaker source ever
//! substitutes silently.

use rand::{rngs::OsRng, Rng};

use crate::domain::entities::otp_record::CODE_LENGTH;

/// Generates a 6-digit numeric code, leading zeros allowed.
pub fn generate_code() -> String {
    generate_code_with_length(CODE_LENGTH)
}

/// Generates a numeric code of the given length.
///
/// Each digit is sampled independently, so the result is uniform over the
/// full `10^length` space.
pub fn generate_code_with_length(length: usize) -> String {
    let mut rng = OsRng;
    let mut code = String::with_capacity(length);
    for _ in 0..length {
        let digit: u8 = rng.gen_range(0..10);
        code.push((b'0' + digit) as char);
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_custom_length() {
        let code = generate_code_with_length(8);
        assert_eq!(code.len(), 8);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: Vec<String> = (0..100).map(|_| generate_code()).collect();

        // Extremely unlikely to collapse to a single value
        let unique_count = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique_count > 1);
    }
}
