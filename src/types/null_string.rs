//! Nullable strings.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A string field that may be JSON `null`.
///
/// `null` decodes to an invalid value; any string, including the empty
/// string, decodes to a valid value.
///
/// # Example
///
/// ```rust
/// use twilio_api::types::NullString;
///
/// let absent: NullString = serde_json::from_str("null").unwrap();
/// assert!(!absent.is_valid());
///
/// let empty: NullString = serde_json::from_str(r#""""#).unwrap();
/// assert_eq!(empty.as_str(), Some(""));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NullString(Option<String>);

impl NullString {
    /// Creates a valid string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    /// Creates an invalid (null) string.
    #[must_use]
    pub const fn null() -> Self {
        Self(None)
    }

    /// Returns `true` if the field carried a string.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the string, or `None` when null.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Converts into an `Option<String>`.
    #[must_use]
    pub fn into_option(self) -> Option<String> {
        self.0
    }
}

impl From<Option<String>> for NullString {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<&str> for NullString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for NullString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or_default())
    }
}

impl Serialize for NullString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NullString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Self)
    }
}
