//! Recording resource implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::RecordingListParams;
//!
//! let params = RecordingListParams {
//!     call_sid: Some("CA123".to_string()),
//!     ..Default::default()
//! };
//! let recordings = client.recordings().page_iterator(&params)?.collect_all().await?;
//! for recording in &recordings {
//!     println!("{}", client.recordings().media_url(&recording.sid));
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError, InvalidHttpRequestError, Params};
use crate::rest::resources::common;
use crate::rest::{LegacyPage, ListResource, Page, PageIterator, ResourcePath};
use crate::types::{ErrorCode, NullString, TwilioDuration, TwilioTime, UintStr};

/// The processing status of a recording.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RecordingStatus {
    /// Recording is in progress.
    InProgress,
    /// Recording is paused.
    Paused,
    /// Recording was stopped.
    Stopped,
    /// Recording is being processed.
    Processing,
    /// Recording is available.
    Completed,
    /// The media is not available.
    Absent,
    /// A status this library does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A call or conference recording.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Recording {
    /// The recording SID.
    pub sid: String,
    /// The owning account.
    pub account_sid: String,
    /// The recorded call.
    pub call_sid: String,
    /// The recorded conference, if any.
    pub conference_sid: NullString,
    /// Processing status.
    pub status: RecordingStatus,
    /// Number of audio channels.
    pub channels: UintStr,
    /// How the recording was started, e.g. `RecordVerb`.
    pub source: String,
    /// Length of the recording; null while in progress.
    pub duration: TwilioDuration,
    /// Cost of the recording, a negative decimal string.
    pub price: NullString,
    /// Currency of `price`.
    pub price_unit: NullString,
    /// Error code if the recording failed.
    pub error_code: ErrorCode,
    /// When recording started.
    pub start_time: TwilioTime,
    /// When the resource was created.
    pub date_created: TwilioTime,
    /// When the resource was last updated.
    pub date_updated: TwilioTime,
    /// Path of this resource.
    pub uri: String,
}

impl ListResource for Recording {
    const KEY: &'static str = "recordings";
    type Envelope = LegacyPage<Self>;
}

/// Filters for listing recordings.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct RecordingListParams {
    /// Only recordings of this call.
    #[serde(rename = "CallSid", skip_serializing_if = "Option::is_none")]
    pub call_sid: Option<String>,
    /// Only recordings of this conference.
    #[serde(rename = "ConferenceSid", skip_serializing_if = "Option::is_none")]
    pub conference_sid: Option<String>,
    /// Only recordings created on this day (`YYYY-MM-DD`).
    #[serde(rename = "DateCreated", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    /// Records per page.
    #[serde(rename = "PageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Operations on recordings.
#[derive(Debug, Clone, Copy)]
pub struct RecordingService<'c> {
    client: &'c Client,
}

impl<'c> RecordingService<'c> {
    /// Creates a service handle.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn collection() -> ResourcePath {
        ResourcePath::account("Recordings")
    }

    /// Fetches a recording's metadata.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, sid: &str) -> Result<Recording, HttpError> {
        common::fetch(self.client, &Self::collection().id(sid), Params::new()).await
    }

    /// Deletes a recording.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, sid: &str) -> Result<(), HttpError> {
        common::remove(self.client, &Self::collection().id(sid)).await
    }

    /// Fetches the first page of recordings.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_page(
        &self,
        params: &RecordingListParams,
    ) -> Result<Page<Recording>, HttpError> {
        common::fetch_page(self.client, &Self::collection(), params).await
    }

    /// Pages through recordings.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn page_iterator(
        &self,
        params: &RecordingListParams,
    ) -> Result<PageIterator<'c, Recording>, InvalidHttpRequestError> {
        common::iterate(self.client, &Self::collection(), params)
    }

    /// Returns the URL of a recording's audio file.
    ///
    /// The URL serves WAV by default; append `.mp3` for MP3. Fetching it
    /// requires the account credentials.
    #[must_use]
    pub fn media_url(&self, sid: &str) -> String {
        let path = Self::collection().id(sid).without_format();
        self.client.resolve_url(&path.target(self.client.account_sid()))
    }
}

impl Client {
    /// Returns the recording service.
    #[must_use]
    pub const fn recordings(&self) -> RecordingService<'_> {
        RecordingService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountSid, AuthToken, TwilioConfig};
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_recording_deserializes_quoted_numbers() {
        let recording: Recording = serde_json::from_value(json!({
            "sid": "REaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "call_sid": "CAaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "conference_sid": null,
            "channels": 1,
            "duration": "4",
            "price": "-0.0025",
            "price_unit": "USD",
            "error_code": null,
            "status": "completed",
            "source": "RecordVerb",
            "start_time": "Fri, 14 Oct 2016 21:56:34 +0000"
        }))
        .unwrap();

        assert_eq!(recording.channels.get(), 1);
        assert_eq!(recording.duration.duration(), Some(Duration::from_secs(4)));
        assert_eq!(recording.status, RecordingStatus::Completed);
        assert!(recording.error_code.is_zero());
        assert_eq!(recording.price.as_str(), Some("-0.0025"));
    }

    #[test]
    fn test_media_url_drops_json_suffix() {
        let config = TwilioConfig::builder()
            .account_sid(AccountSid::new("AC123").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap();
        let client = Client::new(config).unwrap();

        assert_eq!(
            client.recordings().media_url("RE1"),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Recordings/RE1"
        );
    }
}
