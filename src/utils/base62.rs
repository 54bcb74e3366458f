//! Base62 integer encoding used for short codes.
//!
//! The alphabet is digits, lowercase, uppercase, in that order, so the
//! numeric value of a character grows with its position: `0` is zero and
//! `Z` is 61.

/// The 62-character alphabet, ordered digits < lowercase < uppercase.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encodes a non-negative integer as a base62 string.
///
/// Produces the minimal-length representation with the most significant
/// digit first. Zero encodes to the empty string: a zero value has no
/// digits in positional notation, and callers that need a fixed width
/// pad the result themselves.
pub fn encode(mut n: u64) -> String {
    let base = ALPHABET.len() as u64;
    let mut encoded = Vec::new();

    while n > 0 {
        encoded.push(ALPHABET[(n % base) as usize]);
        n /= base;
    }

    encoded.reverse();
    // ALPHABET is ASCII, so the bytes are valid UTF-8.
    String::from_utf8(encoded).expect("base62 alphabet is ASCII")
}

/// Returns true if every character of `s` belongs to the base62 alphabet.
pub fn is_base62(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_is_empty() {
        assert_eq!(encode(0), "");
    }

    #[test]
    fn test_encode_single_digits() {
        assert_eq!(encode(1), "1");
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(35), "z");
        assert_eq!(encode(36), "A");
        assert_eq!(encode(61), "Z");
    }

    #[test]
    fn test_encode_base_rollover() {
        assert_eq!(encode(62), "10");
        assert_eq!(encode(63), "11");
        assert_eq!(encode(62 * 62), "100");
    }

    #[test]
    fn test_encode_no_leading_zero_characters() {
        for n in [1u64, 61, 62, 4095, 238_328, u64::MAX] {
            let s = encode(n);
            assert!(!s.starts_with('0'), "leading zero in {s:?} for {n}");
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode(123_456_789), encode(123_456_789));
    }

    #[test]
    fn test_encode_max_value() {
        let s = encode(u64::MAX);
        assert!(is_base62(&s));
        assert_eq!(s.len(), 11);
    }

    #[test]
    fn test_is_base62() {
        assert!(is_base62("abc123XYZ"));
        assert!(is_base62(""));
        assert!(!is_base62("abc-123"));
        assert!(!is_base62("abc_123"));
        assert!(!is_base62("héllo"));
    }
}
