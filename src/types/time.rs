//! Provider timestamps.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The timestamp layout used by the `2010-04-01` API,
/// e.g. `Tue, 20 Aug 2013 01:41:35 +0000`.
pub const TIME_LAYOUT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// The day layout accepted by date filters such as `StartTime>=`.
pub const SEARCH_DAY_LAYOUT: &str = "%Y-%m-%d";

/// A timestamp field that may be JSON `null`.
///
/// Decoding accepts both [`TIME_LAYOUT`] and RFC 3339 (used by the newer
/// products). Encoding always produces RFC 3339 in UTC, so the textual form
/// changes across a round trip while the decoded value does not.
///
/// # Example
///
/// ```rust
/// use twilio_api::types::TwilioTime;
///
/// let t: TwilioTime = serde_json::from_str(r#""Tue, 20 Aug 2013 01:41:35 +0000""#).unwrap();
/// assert!(t.is_valid());
/// assert_eq!(serde_json::to_string(&t).unwrap(), r#""2013-08-20T01:41:35Z""#);
///
/// let missing: TwilioTime = serde_json::from_str("null").unwrap();
/// assert!(!missing.is_valid());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TwilioTime(Option<DateTime<Utc>>);

impl TwilioTime {
    /// Creates a valid timestamp.
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self(Some(time))
    }

    /// Creates an invalid (null) timestamp.
    #[must_use]
    pub const fn null() -> Self {
        Self(None)
    }

    /// Returns `true` if the field carried a timestamp.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the timestamp, or `None` when null.
    #[must_use]
    pub const fn time(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Parses either the provider layout or RFC 3339.
    ///
    /// # Errors
    ///
    /// Returns the RFC 3339 parse error if neither layout matches.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_str(value, TIME_LAYOUT)
            .or_else(|_| DateTime::parse_from_rfc3339(value))
            .map(|t| Self(Some(t.with_timezone(&Utc))))
    }
}

impl From<DateTime<Utc>> for TwilioTime {
    fn from(time: DateTime<Utc>) -> Self {
        Self::new(time)
    }
}

impl Serialize for TwilioTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(time) => {
                serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_none(),
        }
    }
}

struct TwilioTimeVisitor;

impl<'de> Visitor<'de> for TwilioTimeVisitor {
    type Value = TwilioTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a timestamp string or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value.is_empty() {
            return Ok(TwilioTime::null());
        }
        TwilioTime::parse(value)
            .map_err(|e| E::custom(format!("invalid timestamp '{value}': {e}")))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TwilioTime::null())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TwilioTime::null())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_str(self)
    }
}

impl<'de> Deserialize<'de> for TwilioTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(TwilioTimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decodes_provider_layout() {
        let t: TwilioTime =
            serde_json::from_str(r#""Tue, 20 Aug 2013 01:41:35 +0000""#).unwrap();
        assert_eq!(
            t.time(),
            Some(Utc.with_ymd_and_hms(2013, 8, 20, 1, 41, 35).unwrap())
        );
    }

    #[test]
    fn test_decodes_offset_into_utc() {
        let t: TwilioTime =
            serde_json::from_str(r#""Mon, 05 Sep 2016 22:10:00 -0700""#).unwrap();
        assert_eq!(
            t.time(),
            Some(Utc.with_ymd_and_hms(2016, 9, 6, 5, 10, 0).unwrap())
        );
    }

    #[test]
    fn test_decodes_rfc3339() {
        let t: TwilioTime = serde_json::from_str(r#""2015-04-01T19:55:11Z""#).unwrap();
        assert_eq!(
            t.time(),
            Some(Utc.with_ymd_and_hms(2015, 4, 1, 19, 55, 11).unwrap())
        );
    }

    #[test]
    fn test_null_and_empty_are_invalid() {
        let t: TwilioTime = serde_json::from_str("null").unwrap();
        assert!(!t.is_valid());
        let t: TwilioTime = serde_json::from_str(r#""""#).unwrap();
        assert!(!t.is_valid());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<TwilioTime>(r#""yesterday""#).is_err());
    }

    #[test]
    fn test_round_trip_preserves_decoded_value() {
        let original: TwilioTime =
            serde_json::from_str(r#""Fri, 01 Jul 2016 14:22:16 +0000""#).unwrap();
        let encoded = serde_json::to_string(&original).unwrap();
        assert_eq!(encoded, r#""2016-07-01T14:22:16Z""#);

        let decoded: TwilioTime = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_null_serializes_as_null() {
        assert_eq!(serde_json::to_string(&TwilioTime::null()).unwrap(), "null");
    }
}
