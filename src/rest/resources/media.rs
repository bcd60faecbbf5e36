//! Message media implementation.
//!
//! Media instances describe files attached to an MMS. The metadata lives at
//! the usual `.json` path; the file itself is served from the same path
//! without the suffix, which answers with a redirect to short-lived storage.
//!
//! # Example
//!
//! ```rust,ignore
//! let media = client.messages().media("MM123");
//! for item in media.page_iterator(&Default::default())?.collect_all().await? {
//!     let url = media.get_url(&item.sid).await?;
//!     println!("{} -> {url}", item.content_type);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError, HttpMethod, InvalidHttpRequestError, Params};
use crate::rest::resources::common;
use crate::rest::{LegacyPage, ListResource, PageIterator, ResourcePath};
use crate::types::TwilioTime;

/// A file attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Media {
    /// The media SID.
    pub sid: String,
    /// The owning account.
    pub account_sid: String,
    /// The message this file is attached to.
    pub parent_sid: String,
    /// MIME type, e.g. `image/jpeg`.
    pub content_type: String,
    /// When the resource was created.
    pub date_created: TwilioTime,
    /// When the resource was last updated.
    pub date_updated: TwilioTime,
    /// Path of this resource.
    pub uri: String,
}

impl ListResource for Media {
    const KEY: &'static str = "media_list";
    type Envelope = LegacyPage<Self>;
}

/// Filters for listing media.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct MediaListParams {
    /// Only media created on this day (`YYYY-MM-DD`).
    #[serde(rename = "DateCreated", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    /// Records per page.
    #[serde(rename = "PageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Operations on the media of one message.
#[derive(Debug, Clone)]
pub struct MediaService<'c> {
    client: &'c Client,
    message_sid: String,
}

impl<'c> MediaService<'c> {
    /// Creates a service handle for the media of `message_sid`.
    #[must_use]
    pub fn new(client: &'c Client, message_sid: impl Into<String>) -> Self {
        Self {
            client,
            message_sid: message_sid.into(),
        }
    }

    /// The message whose media this service addresses.
    #[must_use]
    pub fn message_sid(&self) -> &str {
        &self.message_sid
    }

    fn collection(&self) -> ResourcePath {
        ResourcePath::account("Messages")
            .id(self.message_sid.as_str())
            .nested("Media")
    }

    /// Fetches the metadata of one media file.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, sid: &str) -> Result<Media, HttpError> {
        common::fetch(self.client, &self.collection().id(sid), Params::new()).await
    }

    /// Deletes a media file.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, sid: &str) -> Result<(), HttpError> {
        common::remove(self.client, &self.collection().id(sid)).await
    }

    /// Pages through the message's media.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn page_iterator(
        &self,
        params: &MediaListParams,
    ) -> Result<PageIterator<'c, Media>, InvalidHttpRequestError> {
        common::iterate(self.client, &self.collection(), params)
    }

    /// Resolves the temporary download URL of a media file.
    ///
    /// The file path answers with a redirect; the redirect is not followed
    /// and its `Location` is returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::MissingRedirect`] if the response is not a
    /// redirect with a `Location` header, or any other [`HttpError`] if the
    /// request fails.
    pub async fn get_url(&self, sid: &str) -> Result<String, HttpError> {
        let path = self.collection().id(sid).without_format();
        let request = common::request(self.client, HttpMethod::Get, &path, Params::new())?;
        self.client.resolve_redirect(request).await
    }
}
