//! REST resource infrastructure for the Twilio API.
//!
//! This module provides:
//!
//! - **[`ResourcePath`]**: Builds account-scoped and product-root paths
//! - **[`ListResource`] trait**: Names the items key and envelope of a collection
//! - **[`Page<R>`]**: One page of results in either envelope shape
//! - **[`PageIterator`]**: Follows next-page cursors until a listing is exhausted
//! - **[`TimeRangeIterator`]**: Pages through records within a time window
//! - **[`resources`]**: Typed services for calls, messages, rooms and more
//!
//! # Example: Paging Through Messages
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::MessageListParams;
//!
//! let params = MessageListParams {
//!     to: Some("+15558675310".to_string()),
//!     page_size: Some(50),
//!     ..Default::default()
//! };
//!
//! let mut pages = client.messages().page_iterator(&params)?;
//! while let Some(page) = pages.next().await? {
//!     for message in page {
//!         println!("{}: {}", message.sid, message.body);
//!     }
//! }
//! ```
//!
//! The loop ends when [`PageIterator::next`] returns `Ok(None)`, which is
//! normal termination rather than an error.

mod iterator;
mod page;
mod path;
mod resource;
mod time_range;

pub mod resources;

pub use iterator::PageIterator;
pub use page::{Cursor, LegacyLinks, LegacyPage, MetaPage, Page, PageEnvelope, PageLinks, PageMeta};
pub use path::ResourcePath;
pub use resource::ListResource;
pub use time_range::{TimeRange, TimeRangeIterator};
