//! List response envelopes.
//!
//! The API returns list responses in two shapes. The `2010-04-01` API puts
//! paging fields next to the items:
//!
//! ```json
//! { "calls": [...], "page": 0, "page_size": 50, "next_page_uri": "/2010-04-01/...&Page=1" }
//! ```
//!
//! Newer products nest them in a `meta` block which also names the items key:
//!
//! ```json
//! { "alerts": [...], "meta": { "page": 0, "page_size": 50, "key": "alerts", "next_page_url": "https://..." } }
//! ```
//!
//! [`LegacyPage`] and [`MetaPage`] decode one shape each, and [`Page`]
//! detects which one it is given. All three implement [`PageEnvelope`], so
//! the [`PageIterator`](crate::rest::PageIterator) never needs to know which
//! shape it is reading.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::ListResource;

/// Where the next page of a listing can be fetched from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// A path (or absolute URL) from a legacy envelope, requested as given.
    NextPageUri(String),
    /// An absolute URL from a `meta` block. Its query is re-issued against
    /// the collection path.
    NextPageUrl(String),
}

impl Cursor {
    /// Returns the raw cursor text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NextPageUri(s) | Self::NextPageUrl(s) => s,
        }
    }
}

/// The capabilities shared by every list envelope.
pub trait PageEnvelope<R>: de::DeserializeOwned + Send {
    /// Returns the items on this page.
    fn items(&self) -> &[R];

    /// Returns the cursor for the following page, if there is one.
    fn next_cursor(&self) -> Option<Cursor>;

    /// Returns `true` if another page follows.
    fn has_next(&self) -> bool {
        self.next_cursor().is_some()
    }

    /// Returns the zero-based page index the server reported, when it is
    /// meant to be checked against the number of pages fetched.
    fn page_index(&self) -> Option<u64>;

    /// Converts the envelope into the uniform [`Page`] type.
    fn into_page(self) -> Page<R>;
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.is_empty()).cloned()
}

/// Paging fields of a `2010-04-01` list response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyLinks {
    /// Path of the first page.
    pub first_page_uri: String,
    /// Path of the next page; `None` or empty on the last page.
    pub next_page_uri: Option<String>,
    /// Path of the previous page.
    pub previous_page_uri: Option<String>,
    /// Path of this page.
    pub uri: String,
    /// Zero-based index of this page.
    pub page: u64,
    /// Requested page size.
    pub page_size: u64,
    /// Index of the first item on this page.
    pub start: u64,
    /// Index of the last item on this page.
    pub end: u64,
    /// Number of pages, on resources that still report it.
    pub num_pages: Option<u64>,
    /// Total number of items, on resources that still report it.
    pub total: Option<u64>,
}

impl LegacyLinks {
    /// Returns the next-page cursor. An empty URI counts as absent.
    #[must_use]
    pub fn next_cursor(&self) -> Option<Cursor> {
        non_empty(self.next_page_uri.as_ref()).map(Cursor::NextPageUri)
    }
}

/// The `meta` block of a newer-style list response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    /// Zero-based index of this page.
    pub page: u64,
    /// Requested page size.
    pub page_size: u64,
    /// URL of the first page.
    pub first_page_url: String,
    /// URL of the next page; `None` on the last page.
    pub next_page_url: Option<String>,
    /// URL of the previous page.
    pub previous_page_url: Option<String>,
    /// The JSON key of the items array.
    pub key: String,
    /// URL of this page.
    pub url: String,
}

impl PageMeta {
    /// Returns the next-page cursor. An empty URL counts as absent.
    #[must_use]
    pub fn next_cursor(&self) -> Option<Cursor> {
        non_empty(self.next_page_url.as_ref()).map(Cursor::NextPageUrl)
    }
}

/// Paging fields of either envelope shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageLinks {
    /// From a `2010-04-01` response.
    Legacy(LegacyLinks),
    /// From a `meta` block.
    Meta(PageMeta),
}

impl PageLinks {
    /// Returns the next-page cursor.
    #[must_use]
    pub fn next_cursor(&self) -> Option<Cursor> {
        match self {
            Self::Legacy(links) => links.next_cursor(),
            Self::Meta(meta) => meta.next_cursor(),
        }
    }

    /// Returns the zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u64 {
        match self {
            Self::Legacy(links) => links.page,
            Self::Meta(meta) => meta.page,
        }
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> u64 {
        match self {
            Self::Legacy(links) => links.page_size,
            Self::Meta(meta) => meta.page_size,
        }
    }
}

fn take_items<R: ListResource>(
    fields: &mut Map<String, Value>,
    key: &str,
) -> Result<Vec<R>, serde_json::Error> {
    match fields.remove(key) {
        None => Err(de::Error::custom(format!("missing field `{key}`"))),
        Some(Value::Null) => Ok(Vec::new()),
        Some(items) => Vec::<R>::deserialize(items),
    }
}

/// A decoded `2010-04-01` list response.
#[derive(Clone, Debug)]
pub struct LegacyPage<R> {
    /// The records on this page.
    pub items: Vec<R>,
    /// Paging fields.
    pub links: LegacyLinks,
}

impl<R: ListResource> LegacyPage<R> {
    fn from_fields(mut fields: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let items = take_items(&mut fields, R::KEY)?;
        let links = LegacyLinks::deserialize(Value::Object(fields))?;
        Ok(Self { items, links })
    }
}

impl<'de, R: ListResource> Deserialize<'de> for LegacyPage<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::deserialize(deserializer)?;
        Self::from_fields(fields).map_err(de::Error::custom)
    }
}

impl<R: ListResource> PageEnvelope<R> for LegacyPage<R> {
    fn items(&self) -> &[R] {
        &self.items
    }

    fn next_cursor(&self) -> Option<Cursor> {
        self.links.next_cursor()
    }

    fn page_index(&self) -> Option<u64> {
        None
    }

    fn into_page(self) -> Page<R> {
        Page {
            items: self.items,
            links: PageLinks::Legacy(self.links),
        }
    }
}

/// A decoded list response carrying a `meta` block.
#[derive(Clone, Debug)]
pub struct MetaPage<R> {
    /// The records on this page.
    pub items: Vec<R>,
    /// Paging fields.
    pub meta: PageMeta,
}

impl<R: ListResource> MetaPage<R> {
    fn from_fields(mut fields: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let meta = match fields.remove("meta") {
            Some(meta) => PageMeta::deserialize(meta)?,
            None => return Err(de::Error::missing_field("meta")),
        };
        let key = if meta.key.is_empty() {
            R::KEY
        } else {
            meta.key.as_str()
        };
        let items = take_items(&mut fields, key)?;
        Ok(Self { items, meta })
    }
}

impl<'de, R: ListResource> Deserialize<'de> for MetaPage<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::deserialize(deserializer)?;
        Self::from_fields(fields).map_err(de::Error::custom)
    }
}

impl<R: ListResource> PageEnvelope<R> for MetaPage<R> {
    fn items(&self) -> &[R] {
        &self.items
    }

    fn next_cursor(&self) -> Option<Cursor> {
        self.meta.next_cursor()
    }

    fn page_index(&self) -> Option<u64> {
        Some(self.meta.page)
    }

    fn into_page(self) -> Page<R> {
        Page {
            items: self.items,
            links: PageLinks::Meta(self.meta),
        }
    }
}

/// One page of a listing, whichever envelope it arrived in.
///
/// Decoding picks the shape by the presence of a `meta` field.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use twilio_api::rest::{LegacyPage, ListResource, Page};
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
///
/// let page: Page<Queue> = serde_json::from_str(
///     r#"{"queues": [{"sid": "QU1"}], "page": 0, "page_size": 50, "next_page_uri": null}"#,
/// ).unwrap();
/// assert_eq!(page.len(), 1);
/// assert!(!page.has_next());
/// ```
#[derive(Clone, Debug)]
pub struct Page<R> {
    /// The records on this page.
    pub items: Vec<R>,
    /// Paging fields.
    pub links: PageLinks,
}

impl<R> Page<R> {
    /// Returns the number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the next-page cursor.
    #[must_use]
    pub fn next_cursor(&self) -> Option<Cursor> {
        self.links.next_cursor()
    }

    /// Returns `true` if another page follows.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_cursor().is_some()
    }

    /// Iterates over the records on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    /// Consumes the page, returning its records.
    #[must_use]
    pub fn into_items(self) -> Vec<R> {
        self.items
    }
}

impl<R> IntoIterator for Page<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'de, R: ListResource> Deserialize<'de> for Page<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::deserialize(deserializer)?;
        let page = if fields.contains_key("meta") {
            MetaPage::<R>::from_fields(fields).map(PageEnvelope::into_page)
        } else {
            LegacyPage::<R>::from_fields(fields).map(PageEnvelope::into_page)
        };
        page.map_err(de::Error::custom)
    }
}

impl<R: ListResource> PageEnvelope<R> for Page<R> {
    fn items(&self) -> &[R] {
        &self.items
    }

    fn next_cursor(&self) -> Option<Cursor> {
        self.links.next_cursor()
    }

    fn page_index(&self) -> Option<u64> {
        match &self.links {
            PageLinks::Legacy(_) => None,
            PageLinks::Meta(meta) => Some(meta.page),
        }
    }

    fn into_page(self) -> Self {
        self
    }
}

// Verify Page is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Page<String>>();
};
