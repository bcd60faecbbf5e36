//! Conference participant implementation.
//!
//! Participants are addressed by the SID of the call that joined the
//! conference.

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError, InvalidHttpRequestError, Params};
use crate::rest::resources::common;
use crate::rest::{LegacyPage, ListResource, PageIterator, ResourcePath};
use crate::types::TwilioTime;

/// A call connected to a conference.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Participant {
    pub account_sid: String,
    /// The participant's call; doubles as its identifier.
    pub call_sid: String,
    pub conference_sid: String,
    /// A caller-supplied label for the participant.
    pub label: Option<String>,
    pub muted: bool,
    pub hold: bool,
    /// Whether the participant is being coached by another.
    pub coaching: bool,
    /// Whether the conference ends when this participant leaves.
    pub end_conference_on_exit: bool,
    pub start_conference_on_enter: bool,
    /// `queued`, `connecting`, `ringing`, `connected`, `complete` or `failed`.
    pub status: String,
    pub date_created: TwilioTime,
    pub date_updated: TwilioTime,
    pub uri: String,
}

impl ListResource for Participant {
    const KEY: &'static str = "participants";
    type Envelope = LegacyPage<Self>;
}

/// Filters for listing participants.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ParticipantListParams {
    #[serde(rename = "Muted", skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    #[serde(rename = "Hold", skip_serializing_if = "Option::is_none")]
    pub hold: Option<bool>,
    #[serde(rename = "PageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Fields for modifying a participant.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ParticipantUpdateParams {
    #[serde(rename = "Muted", skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    #[serde(rename = "Hold", skip_serializing_if = "Option::is_none")]
    pub hold: Option<bool>,
    /// Music or TwiML played while on hold.
    #[serde(rename = "HoldUrl", skip_serializing_if = "Option::is_none")]
    pub hold_url: Option<String>,
    /// Audio or TwiML played to this participant only.
    #[serde(rename = "AnnounceUrl", skip_serializing_if = "Option::is_none")]
    pub announce_url: Option<String>,
}

/// Operations on the participants of one conference.
#[derive(Debug, Clone)]
pub struct ParticipantService<'c> {
    client: &'c Client,
    conference_sid: String,
}

impl<'c> ParticipantService<'c> {
    /// Creates a service handle for the participants of `conference_sid`.
    #[must_use]
    pub fn new(client: &'c Client, conference_sid: impl Into<String>) -> Self {
        Self {
            client,
            conference_sid: conference_sid.into(),
        }
    }

    fn collection(&self) -> ResourcePath {
        ResourcePath::account("Conferences")
            .id(self.conference_sid.as_str())
            .nested("Participants")
    }

    /// Fetches a participant by call SID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, call_sid: &str) -> Result<Participant, HttpError> {
        common::fetch(self.client, &self.collection().id(call_sid), Params::new()).await
    }

    /// Modifies a participant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(
        &self,
        call_sid: &str,
        params: &ParticipantUpdateParams,
    ) -> Result<Participant, HttpError> {
        common::submit(self.client, &self.collection().id(call_sid), params).await
    }

    /// Mutes a participant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn mute(&self, call_sid: &str) -> Result<Participant, HttpError> {
        self.set_muted(call_sid, true).await
    }

    /// Unmutes a participant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn unmute(&self, call_sid: &str) -> Result<Participant, HttpError> {
        self.set_muted(call_sid, false).await
    }

    async fn set_muted(&self, call_sid: &str, muted: bool) -> Result<Participant, HttpError> {
        let params = ParticipantUpdateParams {
            muted: Some(muted),
            ..Default::default()
        };
        self.update(call_sid, &params).await
    }

    /// Removes a participant, hanging up their call.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn remove(&self, call_sid: &str) -> Result<(), HttpError> {
        common::remove(self.client, &self.collection().id(call_sid)).await
    }

    /// Pages through the conference's participants.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn page_iterator(
        &self,
        params: &ParticipantListParams,
    ) -> Result<PageIterator<'c, Participant>, InvalidHttpRequestError> {
        common::iterate(self.client, &self.collection(), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_participant_deserializes_flags() {
        let participant: Participant = serde_json::from_value(json!({
            "account_sid": "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "call_sid": "CAaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "conference_sid": "CFaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "label": null,
            "muted": true,
            "hold": false,
            "coaching": false,
            "end_conference_on_exit": false,
            "start_conference_on_enter": true,
            "status": "connected",
            "date_created": "Fri, 18 Feb 2011 21:07:19 +0000"
        }))
        .unwrap();

        assert!(participant.muted);
        assert!(!participant.hold);
        assert!(participant.start_conference_on_enter);
        assert_eq!(participant.label, None);
        assert_eq!(participant.status, "connected");
    }

    #[test]
    fn test_mute_params_send_boolean_text() {
        let params = Params::from_serialize(&ParticipantUpdateParams {
            muted: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params.as_slice(), &[("Muted".to_string(), "false".to_string())]);
    }
}
