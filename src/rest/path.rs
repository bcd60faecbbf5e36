//! Path building for REST resources.
//!
//! Resources of the `2010-04-01` API live beneath an account:
//! `/2010-04-01/Accounts/{AccountSid}/Calls/{CallSid}.json`. Newer products
//! and the account collection itself are addressed from the product root,
//! e.g. `/v1/Rooms/{RoomSid}`.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::rest::ResourcePath;
//! use twilio_api::{AccountSid, Product};
//!
//! let sid = AccountSid::new("AC123").unwrap();
//!
//! let path = ResourcePath::account("Calls").id("CA456").nested("Recordings");
//! assert_eq!(path.build(&sid), "/2010-04-01/Accounts/AC123/Calls/CA456/Recordings.json");
//!
//! let path = ResourcePath::root(Product::Video, "Rooms").id("RM789");
//! assert_eq!(path.build(&sid), "/v1/Rooms/RM789");
//! ```

use crate::clients::Target;
use crate::config::{AccountSid, Product};

/// A resource location built from collection names and identifiers.
///
/// Identifiers are inserted verbatim. Provider identifiers are alphanumeric
/// and never need escaping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePath {
    product: Product,
    account_scoped: bool,
    segments: Vec<String>,
    format_suffix: bool,
}

impl ResourcePath {
    /// Starts a path beneath the current account on the core API.
    #[must_use]
    pub fn account(collection: impl Into<String>) -> Self {
        Self {
            product: Product::Api,
            account_scoped: true,
            segments: vec![collection.into()],
            format_suffix: Product::Api.uses_format_suffix(),
        }
    }

    /// Starts a path at a product's root, skipping the account segment.
    #[must_use]
    pub fn root(product: Product, collection: impl Into<String>) -> Self {
        Self {
            product,
            account_scoped: false,
            segments: vec![collection.into()],
            format_suffix: product.uses_format_suffix(),
        }
    }

    /// Appends an instance identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.segments.push(id.into());
        self
    }

    /// Appends a nested collection name.
    #[must_use]
    pub fn nested(mut self, collection: impl Into<String>) -> Self {
        self.segments.push(collection.into());
        self
    }

    /// Drops the `.json` suffix, e.g. to address a recording's media file.
    #[must_use]
    pub const fn without_format(mut self) -> Self {
        self.format_suffix = false;
        self
    }

    /// Returns the product this path belongs to.
    #[must_use]
    pub const fn product(&self) -> Product {
        self.product
    }

    /// Renders the path for an account.
    ///
    /// The account SID is ignored for paths that are not account-scoped.
    #[must_use]
    pub fn build(&self, account_sid: &AccountSid) -> String {
        let mut path = format!("/{}", self.product.version());
        if self.account_scoped {
            path.push_str("/Accounts/");
            path.push_str(account_sid.as_ref());
        }
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        if self.format_suffix {
            path.push_str(".json");
        }
        path
    }

    /// Renders the path as a request target.
    #[must_use]
    pub fn target(&self, account_sid: &AccountSid) -> Target {
        Target::path(self.product, self.build(account_sid))
    }
}
