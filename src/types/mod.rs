//! Typed scalars for Twilio's loosely typed wire format.
//!
//! The API is inconsistent about how it encodes scalar fields: the same
//! logical field may arrive as `null`, a quoted number or a bare number, and
//! timestamps use an RFC 1123 style layout on the `2010-04-01` API. The
//! wrappers in this module give each field one stable Rust type regardless of
//! the wire representation.
//!
//! - [`NullString`]: a string that distinguishes `null` from `""`
//! - [`TwilioTime`]: a timestamp that may be `null`
//! - [`UintStr`]: an unsigned number that may be quoted
//! - [`ErrorCode`]: a provider error code that may be quoted, empty or `"null"`
//! - [`TwilioDuration`]: a duration in seconds that may be quoted or `null`
//!
//! Every wrapper implements `Default` as its invalid or zero value so absent
//! fields can be decoded with `#[serde(default)]`.

mod null_string;
mod numeric;
mod time;

pub use null_string::NullString;
pub use numeric::{ErrorCode, TwilioDuration, UintStr};
pub use time::{TwilioTime, SEARCH_DAY_LAYOUT, TIME_LAYOUT};
