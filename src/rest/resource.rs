//! The trait implemented by every listable record.

use serde::de::DeserializeOwned;

use crate::rest::PageEnvelope;

/// A record that can be listed page by page.
///
/// `KEY` names the array holding the records in a list response, and
/// `Envelope` selects how that response is decoded: [`LegacyPage`] for the
/// `2010-04-01` API, [`MetaPage`] for the newer products.
///
/// [`LegacyPage`]: crate::rest::LegacyPage
/// [`MetaPage`]: crate::rest::MetaPage
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use twilio_api::rest::{LegacyPage, ListResource};
///
/// #[derive(Debug, Deserialize)]
/// struct Queue {
///     sid: String,
/// }
///
/// impl ListResource for Queue {
///     const KEY: &'static str = "queues";
///     type Envelope = LegacyPage<Self>;
/// }
/// ```
pub trait ListResource: DeserializeOwned + Send + Sized {
    /// The JSON key of the items array.
    const KEY: &'static str;

    /// The envelope shape the collection's list endpoint returns.
    type Envelope: PageEnvelope<Self>;
}
