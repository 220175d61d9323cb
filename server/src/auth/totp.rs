//! RFC 6238 time-based one-time passwords over HMAC-SHA1.
//!
//! Secrets are stored base32-encoded (RFC 4648, the encoding every
//! authenticator app expects). Verification accepts one time step of
//! clock drift in either direction.

use ring::{constant_time, hmac};

pub const PERIOD_SECONDS: u64 = 30;
pub const DIGITS: u32 = 6;
const DRIFT_STEPS: i64 = 1;

/// Verify a submitted code against a base32 secret at the given unix time.
///
/// Returns false for malformed secrets or codes rather than erroring;
/// the caller treats every failure the same way.
pub fn verify(secret_base32: &str, code: &str, now_unix: u64) -> bool {
    let code = code.trim();
    if code.len() != DIGITS as usize || !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Some(key) = decode_base32(secret_base32) else {
        return false;
    };

    let counter = (now_unix / PERIOD_SECONDS) as i64;
    for step in counter - DRIFT_STEPS..=counter + DRIFT_STEPS {
        if step < 0 {
            continue;
        }
        let expected = format!("{:06}", hotp(&key, step as u64));
        if constant_time::verify_slices_are_equal(expected.as_bytes(), code.as_bytes()).is_ok() {
            return true;
        }
    }
    false
}

/// RFC 4226 HOTP value for a key and counter, truncated to [`DIGITS`].
fn hotp(key: &[u8], counter: u64) -> u32 {
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key);
    let tag = hmac::sign(&key, &counter.to_be_bytes());
    let digest = tag.as_ref();

    // Dynamic truncation per RFC 4226 §5.3
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let binary = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);
    binary % 10u32.pow(DIGITS)
}

/// Decode RFC 4648 base32. Accepts lower case and trailing padding,
/// rejects any other character.
pub fn decode_base32(input: &str) -> Option<Vec<u8>> {
    let trimmed = input.trim_end_matches('=');
    let mut out = Vec::with_capacity(trimmed.len() * 5 / 8);
    let mut buffer: u64 = 0;
    let mut bits = 0u32;

    for ch in trimmed.bytes() {
        let value = match ch {
            b'A'..=b'Z' => ch - b'A',
            b'a'..=b'z' => ch - b'a',
            b'2'..=b'7' => ch - b'2' + 26,
            _ => return None,
        };
        buffer = (buffer << 5) | u64::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }
    Some(out)
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    // Shared test key from RFC 4226 appendix D
    const RFC_KEY: &[u8] = b"12345678901234567890";
    // The same key, base32-encoded
    const RFC_KEY_BASE32: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

    #[test]
    fn decodes_base32() {
        assert_eq!(decode_base32("MZXW6YTBOI======").unwrap(), b"foobar");
        assert_eq!(decode_base32("mzxw6ytboi").unwrap(), b"foobar");
        assert_eq!(decode_base32(RFC_KEY_BASE32).unwrap(), RFC_KEY);
        assert!(decode_base32("not!base32").is_none());
    }

    #[test]
    fn hotp_matches_rfc_4226_vectors() {
        assert_eq!(hotp(RFC_KEY, 0), 755_224);
        assert_eq!(hotp(RFC_KEY, 1), 287_082);
        assert_eq!(hotp(RFC_KEY, 9), 520_489);
    }

    #[test]
    fn totp_matches_rfc_6238_vector() {
        // t=59s falls in time step 1
        assert!(verify(RFC_KEY_BASE32, "287082", 59));
    }

    #[test]
    fn accepts_one_step_of_drift() {
        // code for step 1 (t in 30..60) presented at t=65 (step 2)
        assert!(verify(RFC_KEY_BASE32, "287082", 65));
        // and two steps away is rejected
        assert!(!verify(RFC_KEY_BASE32, "287082", 125));
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(!verify(RFC_KEY_BASE32, "28708", 59));
        assert!(!verify(RFC_KEY_BASE32, "28708a", 59));
        assert!(!verify(RFC_KEY_BASE32, "", 59));
    }

    #[test]
    fn rejects_malformed_secret() {
        assert!(!verify("not!base32", "287082", 59));
    }
}
