//! Phone number lookups.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::LookupType;
//!
//! let number = client
//!     .lookups()
//!     .get("+15108675310", &[LookupType::Carrier])
//!     .await?;
//! if let Some(carrier) = &number.carrier {
//!     println!("{} is on {}", number.phone_number, carrier.name.as_deref().unwrap_or("?"));
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError, Params};
use crate::config::Product;
use crate::rest::resources::common;
use crate::rest::ResourcePath;

/// Extra data a lookup can return, each billed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupType {
    /// The carrier and line type.
    Carrier,
    /// The registered caller name (US numbers only).
    CallerName,
}

impl LookupType {
    /// Returns the value sent in the `Type` parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Carrier => "carrier",
            Self::CallerName => "caller-name",
        }
    }
}

/// Carrier information for a number.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Carrier {
    pub name: Option<String>,
    /// `mobile`, `landline` or `voip`.
    #[serde(rename = "type")]
    pub line_type: Option<String>,
    pub mobile_country_code: Option<String>,
    pub mobile_network_code: Option<String>,
    pub error_code: Option<u32>,
}

/// Caller name information for a number.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CallerName {
    pub caller_name: Option<String>,
    /// `BUSINESS` or `CONSUMER`.
    pub caller_type: Option<String>,
    pub error_code: Option<u32>,
}

/// The result of a lookup.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PhoneNumber {
    /// The number in E.164 format.
    pub phone_number: String,
    pub country_code: String,
    pub national_format: String,
    /// Present when [`LookupType::Carrier`] was requested.
    pub carrier: Option<Carrier>,
    /// Present when [`LookupType::CallerName`] was requested.
    pub caller_name: Option<CallerName>,
    pub url: String,
}

/// Phone number lookups.
#[derive(Debug, Clone, Copy)]
pub struct LookupService<'c> {
    client: &'c Client,
}

impl<'c> LookupService<'c> {
    /// Creates a service handle.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn path(phone_number: &str) -> ResourcePath {
        ResourcePath::root(Product::Lookups, "PhoneNumbers")
            .id(urlencoding::encode(phone_number).into_owned())
    }

    /// Looks up a phone number, optionally requesting extra data.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails. An unknown number is
    /// reported as an API error for which
    /// [`HttpError::is_not_found`] is `true`.
    pub async fn get(
        &self,
        phone_number: &str,
        types: &[LookupType],
    ) -> Result<PhoneNumber, HttpError> {
        let params: Params = types.iter().map(|t| ("Type", t.as_str())).collect();
        common::fetch(self.client, &Self::path(phone_number), params).await
    }
}

impl Client {
    /// Returns the lookup service.
    #[must_use]
    pub const fn lookups(&self) -> LookupService<'_> {
        LookupService::new(self)
    }
}
