//! Typed services for Twilio resources.
//!
//! Each service is a borrowed handle obtained from the [`Client`]:
//!
//! | Handle | Records |
//! |---|---|
//! | `client.accounts()` | [`Account`] |
//! | `client.calls()` | [`Call`], plus nested [`Recording`]s |
//! | `client.messages()` | [`Message`], plus nested [`Media`] |
//! | `client.conferences()` | [`Conference`], plus nested [`Participant`]s |
//! | `client.recordings()` | [`Recording`] |
//! | `client.alerts()` | [`Alert`] (Monitor) |
//! | `client.rooms()` | [`Room`] (Video) |
//! | `client.lookups()` | [`PhoneNumber`] (Lookups) |
//!
//! Handles are cheap to create and hold nothing but the client reference, so
//! `client.calls().get(sid)` is the normal way to call them.
//!
//! # Filters
//!
//! List operations take a `*ListParams` struct whose fields serialize to the
//! provider's parameter names. Unset fields are omitted:
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::{CallListParams, CallStatus};
//!
//! let params = CallListParams {
//!     status: Some(CallStatus::Busy),
//!     page_size: Some(100),
//!     ..Default::default()
//! };
//! let busy = client.calls().page_iterator(&params)?.collect_all().await?;
//! ```
//!
//! [`Client`]: crate::clients::Client

mod common;

mod account;
mod alert;
mod call;
mod conference;
mod lookup;
mod media;
mod message;
mod participant;
mod recording;
mod room;

pub use account::{
    Account, AccountCreateParams, AccountListParams, AccountService, AccountStatus,
    AccountUpdateParams,
};
pub use alert::{Alert, AlertListParams, AlertService, LogLevel};
pub use call::{Call, CallCreateParams, CallListParams, CallService, CallStatus, CallUpdateParams};
pub use conference::{
    Conference, ConferenceListParams, ConferenceService, ConferenceStatus, ConferenceUpdateParams,
};
pub use lookup::{CallerName, Carrier, LookupService, LookupType, PhoneNumber};
pub use media::{Media, MediaListParams, MediaService};
pub use message::{
    Message, MessageCreateParams, MessageDirection, MessageListParams, MessageService,
    MessageStatus, MessageUpdateParams,
};
pub use participant::{
    Participant, ParticipantListParams, ParticipantService, ParticipantUpdateParams,
};
pub use recording::{Recording, RecordingListParams, RecordingService, RecordingStatus};
pub use room::{Room, RoomCreateParams, RoomListParams, RoomService, RoomStatus, RoomType};
