//! Conference resource implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::{ConferenceListParams, ConferenceStatus};
//!
//! let params = ConferenceListParams {
//!     status: Some(ConferenceStatus::InProgress),
//!     ..Default::default()
//! };
//! for conference in client.conferences().page_iterator(&params)?.collect_all().await? {
//!     let participants = client
//!         .conferences()
//!         .participants(&conference.sid)
//!         .page_iterator(&Default::default())?
//!         .collect_all()
//!         .await?;
//!     println!("{}: {} on the line", conference.friendly_name, participants.len());
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError, InvalidHttpRequestError, Params};
use crate::rest::resources::common;
use crate::rest::resources::participant::ParticipantService;
use crate::rest::{
    LegacyPage, ListResource, Page, PageIterator, ResourcePath, TimeRange, TimeRangeIterator,
};
use crate::types::TwilioTime;

const DATE_CREATED_FIELD: &str = "DateCreated";

/// The status of a conference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ConferenceStatus {
    /// Created but nobody has joined yet.
    Init,
    /// At least one participant is connected.
    InProgress,
    /// Everyone left or the conference was ended.
    Completed,
    /// A status this library does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A voice conference.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Conference {
    pub sid: String,
    pub account_sid: String,
    /// The name given in the `<Conference>` TwiML noun.
    pub friendly_name: String,
    pub status: ConferenceStatus,
    /// Region the conference was mixed in.
    pub region: String,
    /// Why the conference ended, e.g. `last-participant-left`.
    pub reason_conference_ended: Option<String>,
    pub date_created: TwilioTime,
    pub date_updated: TwilioTime,
    pub uri: String,
}

impl ListResource for Conference {
    const KEY: &'static str = "conferences";
    type Envelope = LegacyPage<Self>;
}

/// Filters for listing conferences.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ConferenceListParams {
    #[serde(rename = "FriendlyName", skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<ConferenceStatus>,
    /// Only conferences created on this day (`YYYY-MM-DD`).
    #[serde(rename = "DateCreated", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    /// Only conferences updated on this day (`YYYY-MM-DD`).
    #[serde(rename = "DateUpdated", skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<String>,
    #[serde(rename = "PageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Fields for modifying a conference.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ConferenceUpdateParams {
    /// Set to `completed` to end the conference.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<ConferenceStatus>,
    /// Audio or TwiML to play to every participant.
    #[serde(rename = "AnnounceUrl", skip_serializing_if = "Option::is_none")]
    pub announce_url: Option<String>,
    #[serde(rename = "AnnounceMethod", skip_serializing_if = "Option::is_none")]
    pub announce_method: Option<String>,
}

/// Operations on conferences.
#[derive(Debug, Clone, Copy)]
pub struct ConferenceService<'c> {
    client: &'c Client,
}

impl<'c> ConferenceService<'c> {
    /// Creates a service handle.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn collection() -> ResourcePath {
        ResourcePath::account("Conferences")
    }

    /// Fetches a conference by SID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, sid: &str) -> Result<Conference, HttpError> {
        common::fetch(self.client, &Self::collection().id(sid), Params::new()).await
    }

    /// Modifies a conference.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(
        &self,
        sid: &str,
        params: &ConferenceUpdateParams,
    ) -> Result<Conference, HttpError> {
        common::submit(self.client, &Self::collection().id(sid), params).await
    }

    /// Fetches the first page of conferences.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_page(
        &self,
        params: &ConferenceListParams,
    ) -> Result<Page<Conference>, HttpError> {
        common::fetch_page(self.client, &Self::collection(), params).await
    }

    /// Pages through conferences.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn page_iterator(
        &self,
        params: &ConferenceListParams,
    ) -> Result<PageIterator<'c, Conference>, InvalidHttpRequestError> {
        common::iterate(self.client, &Self::collection(), params)
    }

    /// Pages through conferences created within `range`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn conferences_in_range(
        &self,
        params: &ConferenceListParams,
        range: TimeRange,
    ) -> Result<TimeRangeIterator<'c, Conference>, InvalidHttpRequestError> {
        let inner = self.page_iterator(params)?;
        Ok(TimeRangeIterator::new(inner, DATE_CREATED_FIELD, range))
    }

    /// Returns the participant service for one conference.
    #[must_use]
    pub fn participants(&self, conference_sid: &str) -> ParticipantService<'c> {
        ParticipantService::new(self.client, conference_sid)
    }
}

impl Client {
    /// Returns the conference service.
    #[must_use]
    pub const fn conferences(&self) -> ConferenceService<'_> {
        ConferenceService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_conference_deserializes_from_api_fixture() {
        let conference: Conference = serde_json::from_value(json!({
            "account_sid": "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "date_created": "Fri, 18 Feb 2011 19:26:50 +0000",
            "date_updated": "Fri, 18 Feb 2011 19:27:33 +0000",
            "friendly_name": "AHH YEAH",
            "region": "us1",
            "sid": "CFaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "status": "completed",
            "reason_conference_ended": "last-participant-left",
            "uri": "/2010-04-01/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Conferences/CFaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa.json"
        }))
        .unwrap();

        assert_eq!(conference.status, ConferenceStatus::Completed);
        assert_eq!(conference.friendly_name, "AHH YEAH");
        assert_eq!(
            conference.reason_conference_ended.as_deref(),
            Some("last-participant-left")
        );
    }

    #[test]
    fn test_update_params_end_conference() {
        let params = Params::from_serialize(&ConferenceUpdateParams {
            status: Some(ConferenceStatus::Completed),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params.get("Status"), Some("completed"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_list_params_encode_in_progress() {
        let params = Params::from_serialize(&ConferenceListParams {
            status: Some(ConferenceStatus::InProgress),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params.get("Status"), Some("in-progress"));
    }
}
