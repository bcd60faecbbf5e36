//! Numbers that may arrive quoted.

use std::fmt;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Accepts a bare unsigned number, a quoted one, or `null`.
///
/// Blank strings and `null` both decode to `None`. `null_literal` also maps the
/// string `"null"` to `None`, which the API emits for some error codes.
struct LooseUintVisitor {
    null_literal: bool,
}

impl<'de> Visitor<'de> for LooseUintVisitor {
    type Value = Option<u64>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned integer, a string containing one, or null")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value)
            .map(Some)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let trimmed = value.trim();
        if trimmed.is_empty() || (self.null_literal && trimmed == "null") {
            return Ok(None);
        }
        trimmed
            .parse::<u64>()
            .map(Some)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

fn deserialize_loose_uint<'de, D>(
    deserializer: D,
    null_literal: bool,
) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(LooseUintVisitor { null_literal })
}

/// An unsigned quantity the API may send as `"3"` or `3`.
///
/// An empty string decodes to zero.
///
/// # Example
///
/// ```rust
/// use twilio_api::types::UintStr;
///
/// assert_eq!(serde_json::from_str::<UintStr>(r#""3""#).unwrap(), UintStr(3));
/// assert_eq!(serde_json::from_str::<UintStr>("3").unwrap(), UintStr(3));
/// assert_eq!(serde_json::from_str::<UintStr>(r#""""#).unwrap(), UintStr(0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UintStr(pub u64);

impl UintStr {
    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UintStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for UintStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for UintStr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_loose_uint(deserializer, false).map(|v| Self(v.unwrap_or_default()))
    }
}

/// A provider error code such as `20404`.
///
/// Quoted and bare numbers are accepted; `null`, `""` and `"null"` decode to
/// zero, meaning "no error".
///
/// # Example
///
/// ```rust
/// use twilio_api::types::ErrorCode;
///
/// assert_eq!(serde_json::from_str::<ErrorCode>("20404").unwrap(), ErrorCode(20404));
/// assert_eq!(serde_json::from_str::<ErrorCode>(r#""null""#).unwrap(), ErrorCode(0));
/// assert_eq!(ErrorCode(20404).to_string(), "20404");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode(pub u32);

impl ErrorCode {
    /// Returns `true` when no error code is set.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = deserialize_loose_uint(deserializer, true)?.unwrap_or_default();
        u32::try_from(value)
            .map(Self)
            .map_err(|_| de::Error::custom(format!("error code {value} out of range")))
    }
}

/// A duration in whole seconds that may be quoted or `null`.
///
/// Call and recording durations are `null` until the call completes.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use twilio_api::types::TwilioDuration;
///
/// let d: TwilioDuration = serde_json::from_str(r#""88""#).unwrap();
/// assert_eq!(d.duration(), Some(Duration::from_secs(88)));
///
/// let pending: TwilioDuration = serde_json::from_str("null").unwrap();
/// assert!(!pending.is_valid());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TwilioDuration(Option<Duration>);

impl TwilioDuration {
    /// Creates a valid duration.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self(Some(duration))
    }

    /// Returns `true` if the field carried a duration.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the duration, or `None` when null.
    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        self.0
    }
}

impl Serialize for TwilioDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(d) => serializer.serialize_u64(d.as_secs()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for TwilioDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_loose_uint(deserializer, false).map(|v| Self(v.map(Duration::from_secs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_uint_str_accepts_quoted_and_bare() {
        assert_eq!(serde_json::from_str::<UintStr>(r#""3""#).unwrap(), UintStr(3));
        assert_eq!(serde_json::from_str::<UintStr>("3").unwrap(), UintStr(3));
        assert_eq!(serde_json::from_str::<UintStr>(r#""""#).unwrap(), UintStr(0));
        assert_eq!(serde_json::from_str::<UintStr>("null").unwrap(), UintStr(0));
    }

    #[test]
    fn test_uint_str_rejects_non_numeric() {
        assert!(serde_json::from_str::<UintStr>(r#""three""#).is_err());
        assert!(serde_json::from_str::<UintStr>("-1").is_err());
        assert!(serde_json::from_str::<UintStr>("true").is_err());
    }

    #[test]
    fn test_error_code_variants() {
        assert_eq!(serde_json::from_str::<ErrorCode>("20404").unwrap(), ErrorCode(20404));
        assert_eq!(serde_json::from_str::<ErrorCode>(r#""21211""#).unwrap(), ErrorCode(21211));
        assert_eq!(serde_json::from_str::<ErrorCode>(r#""""#).unwrap(), ErrorCode(0));
        assert_eq!(serde_json::from_str::<ErrorCode>(r#""null""#).unwrap(), ErrorCode(0));
        assert_eq!(serde_json::from_str::<ErrorCode>("null").unwrap(), ErrorCode(0));
        assert!(ErrorCode(0).is_zero());
    }

    #[test]
    fn test_plain_uint_str_does_not_accept_null_literal() {
        assert!(serde_json::from_str::<UintStr>(r#""null""#).is_err());
    }

    #[test]
    fn test_duration_decoding() {
        let d: TwilioDuration = serde_json::from_str("12").unwrap();
        assert_eq!(d.duration(), Some(Duration::from_secs(12)));
        let d: TwilioDuration = serde_json::from_str(r#""""#).unwrap();
        assert!(!d.is_valid());
    }

    #[test]
    fn test_fields_in_struct() {
        #[derive(Deserialize)]
        struct Message {
            num_segments: UintStr,
            #[serde(default)]
            num_media: UintStr,
            error_code: ErrorCode,
        }

        let m: Message =
            serde_json::from_str(r#"{"num_segments": "2", "error_code": null}"#).unwrap();
        assert_eq!(m.num_segments.get(), 2);
        assert_eq!(m.num_media.get(), 0);
        assert!(m.error_code.is_zero());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&UintStr(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&ErrorCode(30008)).unwrap(), "30008");
        assert_eq!(
            serde_json::to_string(&TwilioDuration::new(Duration::from_secs(5))).unwrap(),
            "5"
        );
        assert_eq!(serde_json::to_string(&TwilioDuration::default()).unwrap(), "null");
    }
}
