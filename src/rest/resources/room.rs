//! Video room implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::{RoomCreateParams, RoomType};
//!
//! let room = client
//!     .rooms()
//!     .create(&RoomCreateParams {
//!         unique_name: Some("standup".to_string()),
//!         room_type: Some(RoomType::Group),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! client.rooms().complete(&room.sid).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError, InvalidHttpRequestError, Params};
use crate::config::Product;
use crate::rest::resources::common;
use crate::rest::{ListResource, MetaPage, Page, PageIterator, ResourcePath};
use crate::types::{TwilioDuration, TwilioTime};

/// The status of a room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RoomStatus {
    InProgress,
    Completed,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// The topology of a room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    Go,
    PeerToPeer,
    Group,
    GroupSmall,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A video room.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Room {
    pub sid: String,
    pub account_sid: String,
    pub unique_name: String,
    pub status: RoomStatus,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub max_participants: u32,
    /// Whether participants are recorded as they join.
    pub record_participants_on_connect: bool,
    /// Media region, e.g. `us1`.
    pub media_region: Option<String>,
    pub status_callback: Option<String>,
    /// How long the room was open; null while in progress.
    pub duration: TwilioDuration,
    pub end_time: TwilioTime,
    pub date_created: TwilioTime,
    pub date_updated: TwilioTime,
    pub url: String,
}

impl ListResource for Room {
    const KEY: &'static str = "rooms";
    type Envelope = MetaPage<Self>;
}

/// Filters for listing rooms.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct RoomListParams {
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
    #[serde(rename = "UniqueName", skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    /// RFC 3339 lower bound on creation time.
    #[serde(rename = "DateCreatedAfter", skip_serializing_if = "Option::is_none")]
    pub date_created_after: Option<String>,
    /// RFC 3339 upper bound on creation time.
    #[serde(rename = "DateCreatedBefore", skip_serializing_if = "Option::is_none")]
    pub date_created_before: Option<String>,
    #[serde(rename = "PageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Fields for creating a room.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct RoomCreateParams {
    #[serde(rename = "UniqueName", skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(rename = "StatusCallback", skip_serializing_if = "Option::is_none")]
    pub status_callback: Option<String>,
    #[serde(rename = "MaxParticipants", skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(rename = "RecordParticipantsOnConnect", skip_serializing_if = "Option::is_none")]
    pub record_participants_on_connect: Option<bool>,
}

#[derive(Serialize)]
struct RoomUpdateParams {
    #[serde(rename = "Status")]
    status: RoomStatus,
}

/// Operations on video rooms.
#[derive(Debug, Clone, Copy)]
pub struct RoomService<'c> {
    client: &'c Client,
}

impl<'c> RoomService<'c> {
    /// Creates a service handle.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn collection() -> ResourcePath {
        ResourcePath::root(Product::Video, "Rooms")
    }

    /// Fetches a room by SID or unique name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, sid_or_name: &str) -> Result<Room, HttpError> {
        common::fetch(self.client, &Self::collection().id(sid_or_name), Params::new()).await
    }

    /// Creates a room.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, params: &RoomCreateParams) -> Result<Room, HttpError> {
        common::submit(self.client, &Self::collection(), params).await
    }

    /// Ends a room, disconnecting every participant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn complete(&self, sid: &str) -> Result<Room, HttpError> {
        let params = RoomUpdateParams {
            status: RoomStatus::Completed,
        };
        common::submit(self.client, &Self::collection().id(sid), &params).await
    }

    /// Fetches the first page of rooms.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_page(&self, params: &RoomListParams) -> Result<Page<Room>, HttpError> {
        common::fetch_page(self.client, &Self::collection(), params).await
    }

    /// Pages through rooms.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn page_iterator(
        &self,
        params: &RoomListParams,
    ) -> Result<PageIterator<'c, Room>, InvalidHttpRequestError> {
        common::iterate(self.client, &Self::collection(), params)
    }
}

impl Client {
    /// Returns the video room service.
    #[must_use]
    pub const fn rooms(&self) -> RoomService<'_> {
        RoomService::new(self)
    }
}
