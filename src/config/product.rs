//! API product roots.
//!
//! Twilio serves its resources from several hosts. The original `2010-04-01`
//! API lives on `api.twilio.com` and addresses everything beneath an account;
//! the newer products live on their own hosts under a `v1` prefix and use the
//! metadata page envelope.

use std::fmt;

/// A Twilio API product, which determines host, version prefix and path style.
///
/// # Example
///
/// ```rust
/// use twilio_api::Product;
///
/// assert_eq!(Product::Api.version(), "2010-04-01");
/// assert_eq!(Product::Monitor.default_base_url(), "https://monitor.twilio.com");
/// assert!(Product::Api.uses_format_suffix());
/// assert!(!Product::Video.uses_format_suffix());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Product {
    /// The core REST API (calls, messages, conferences, recordings, accounts).
    Api,
    /// Debugger alerts.
    Monitor,
    /// Programmable video rooms.
    Video,
    /// Phone number lookups.
    Lookups,
}

impl Product {
    /// All known products.
    pub const ALL: [Self; 4] = [Self::Api, Self::Monitor, Self::Video, Self::Lookups];

    /// Returns the production host for this product.
    #[must_use]
    pub const fn default_base_url(&self) -> &'static str {
        match self {
            Self::Api => "https://api.twilio.com",
            Self::Monitor => "https://monitor.twilio.com",
            Self::Video => "https://video.twilio.com",
            Self::Lookups => "https://lookups.twilio.com",
        }
    }

    /// Returns the version path segment for this product.
    #[must_use]
    pub const fn version(&self) -> &'static str {
        match self {
            Self::Api => "2010-04-01",
            Self::Monitor | Self::Video | Self::Lookups => "v1",
        }
    }

    /// Returns `true` if resource paths end in `.json`.
    #[must_use]
    pub const fn uses_format_suffix(&self) -> bool {
        matches!(self, Self::Api)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Api => "api",
            Self::Monitor => "monitor",
            Self::Video => "video",
            Self::Lookups => "lookups",
        };
        f.write_str(name)
    }
}
