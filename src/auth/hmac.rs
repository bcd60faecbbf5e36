//! HMAC signatures for Twilio webhook requests.
//!
//! Twilio signs every webhook it sends with HMAC-SHA1 keyed by the account's
//! auth token. The signed message is the full request URL followed by each
//! form field name and value, with fields sorted by name.
//!
//! # Security
//!
//! All signature comparisons use constant-time comparison to prevent timing
//! attacks.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::auth::hmac::compute_signature;
//! use twilio_api::clients::Params;
//!
//! let mut form = Params::new();
//! form.set("CallSid", "CA1234567890ABCDE");
//! form.set("Digits", "1234");
//!
//! let signature = compute_signature("https://example.com/voice", &form, "12345");
//! assert_eq!(signature.len(), 28); // Base64 of 20 bytes
//! ```

use std::collections::BTreeMap;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::clients::Params;

type HmacSha1 = Hmac<Sha1>;

/// Builds the string that Twilio signs for a request.
///
/// The URL is used exactly as given. Form fields are sorted by name using
/// byte-wise ordering; each name is immediately followed by its first value
/// with no delimiters.
///
/// # Example
///
/// ```rust
/// use twilio_api::auth::hmac::signable_string;
/// use twilio_api::clients::Params;
///
/// let mut form = Params::new();
/// form.add("To", "+18005551212");
/// form.add("Digits", "1234");
/// form.add("Digits", "5678");
///
/// assert_eq!(
///     signable_string("https://example.com/a?b=1", &form),
///     "https://example.com/a?b=1Digits1234To+18005551212",
/// );
/// ```
#[must_use]
pub fn signable_string(url: &str, form: &Params) -> String {
    let mut first_values: BTreeMap<&str, &str> = BTreeMap::new();
    for (name, value) in form.iter() {
        first_values.entry(name).or_insert(value);
    }

    let mut signable = String::from(url);
    for (name, value) in first_values {
        signable.push_str(name);
        signable.push_str(value);
    }
    signable
}

/// Computes the expected `X-Twilio-Signature` value for a request.
///
/// # Arguments
///
/// * `url` - The full URL Twilio requested, including the query string
/// * `form` - The POST form fields (empty for GET requests)
/// * `auth_token` - The account auth token
///
/// # Returns
///
/// The standard base64 encoding of the HMAC-SHA1 digest.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(url: &str, form: &Params, auth_token: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(auth_token.as_bytes()).expect("HMAC can take key of any size");
    mac.update(signable_string(url, form).as_bytes());
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

/// Computes the lowercase hex SHA-256 digest of a request body.
///
/// Twilio sends this digest in the `bodySHA256` query parameter for webhooks
/// whose body is not form-encoded.
#[must_use]
pub fn body_sha256_hex(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}

/// Performs constant-time comparison of two strings.
///
/// Strings of different length compare unequal without leaking where they
/// differ.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

// Internal hex encoding since we don't want to add another dependency
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_form() -> Params {
        let mut form = Params::new();
        form.set("Digits", "1234");
        form.set("To", "+18005551212");
        form.set("From", "+14158675309");
        form.set("Caller", "+14158675309");
        form.set("CallSid", "CA1234567890ABCDE");
        form
    }

    const REFERENCE_URL: &str = "https://mycompany.com/myapp.php?foo=1&bar=2";

    #[test]
    fn test_compute_signature_matches_known_value() {
        let sig = compute_signature(REFERENCE_URL, &reference_form(), "12345");
        assert_eq!(sig, "RSOYDt4T1cUTdK1PDd93/VVr8B8=");
    }

    #[test]
    fn test_compute_signature_is_reproducible() {
        let a = compute_signature(REFERENCE_URL, &reference_form(), "12345");
        let b = compute_signature(REFERENCE_URL, &reference_form(), "12345");
        assert_eq!(a, b);
    }

    #[test]
    fn test_changing_a_value_changes_signature() {
        let mut form = reference_form();
        form.set("Digits", "1235");
        assert_ne!(
            compute_signature(REFERENCE_URL, &form, "12345"),
            "RSOYDt4T1cUTdK1PDd93/VVr8B8="
        );
    }

    #[test]
    fn test_adding_a_field_changes_signature() {
        let mut form = reference_form();
        form.set("cat", "3");
        assert_ne!(
            compute_signature(REFERENCE_URL, &form, "12345"),
            "RSOYDt4T1cUTdK1PDd93/VVr8B8="
        );
    }

    #[test]
    fn test_url_is_not_canonicalized() {
        let form = reference_form();
        let with_slash = compute_signature("https://mycompany.com/", &form, "12345");
        let without_slash = compute_signature("https://mycompany.com", &form, "12345");
        assert_ne!(with_slash, without_slash);
    }

    #[test]
    fn test_signable_string_sorts_byte_wise() {
        let mut form = Params::new();
        form.set("b", "2");
        form.set("B", "1");
        form.set("a", "3");
        // Uppercase sorts before lowercase.
        assert_eq!(signable_string("u", &form), "uB1a3b2");
    }

    #[test]
    fn test_signable_string_uses_first_value_only() {
        let mut form = Params::new();
        form.add("Digits", "1");
        form.add("Digits", "2");
        assert_eq!(signable_string("u", &form), "uDigits1");
    }

    #[test]
    fn test_signature_length() {
        let sig = compute_signature("https://example.com", &Params::new(), "secret");
        assert_eq!(sig.len(), 28);
        assert!(sig.ends_with('='));
    }

    #[test]
    fn test_body_sha256_hex_matches_known_value() {
        let body = br#"{"property": "value", "boolean": true}"#;
        assert_eq!(
            body_sha256_hex(body),
            "0a1ff7634d9ab3b95db5c9a2dfe9416e41502b283a80c7cf19632632f96e6620"
        );
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc123", "abc123"));
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("abc123", "abc124"));
        assert!(!constant_time_compare("abc", "abcd"));
        assert!(!constant_time_compare("a", ""));
    }

    #[test]
    fn test_hex_encoding() {
        assert_eq!(hex::encode([0x00, 0xff, 0xab, 0xcd]), "00ffabcd");
        assert_eq!(hex::encode([]), "");
    }
}
