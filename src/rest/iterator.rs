//! Cursor-driven paging over a collection.
//!
//! A [`PageIterator`] starts **fresh**, fetches the first page with the
//! caller's filters, and then follows the cursor each envelope reports until
//! none is left. Once **exhausted**, [`next`](PageIterator::next) returns
//! `Ok(None)` without touching the network.
//!
//! A failed fetch leaves the iterator exactly as it was, so the same page can
//! be requested again by calling `next` once more.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut pages = client.calls().page_iterator(&CallListParams::default())?;
//! while let Some(page) = pages.next().await? {
//!     for call in page {
//!         println!("{} {:?}", call.sid, call.status);
//!     }
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::clients::{
    Client, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError, Params, Target,
};
use crate::config::Product;
use crate::rest::{Cursor, ListResource, Page, PageEnvelope};

#[derive(Clone, Debug, PartialEq, Eq)]
enum State {
    Fresh,
    HasMore(Cursor),
    Exhausted,
}

/// Fetches the pages of one listing in order.
///
/// An iterator owns its cursor; concurrent use needs external
/// synchronisation, and each listing should get its own iterator.
pub struct PageIterator<'c, R> {
    client: &'c Client,
    product: Product,
    path: String,
    params: Params,
    state: State,
    pages_fetched: u64,
    expected_index: Option<u64>,
    _marker: PhantomData<fn() -> R>,
}

impl<R> fmt::Debug for PageIterator<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageIterator")
            .field("product", &self.product)
            .field("path", &self.path)
            .field("params", &self.params)
            .field("state", &self.state)
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}

impl<'c, R: ListResource> PageIterator<'c, R> {
    /// Creates an iterator over the collection at `path`.
    ///
    /// `params` are sent with the first request only; later requests follow
    /// the cursor, which carries the filters itself.
    #[must_use]
    pub fn new(
        client: &'c Client,
        product: Product,
        path: impl Into<String>,
        params: Params,
    ) -> Self {
        Self {
            client,
            product,
            path: path.into(),
            params,
            state: State::Fresh,
            pages_fetched: 0,
            expected_index: Some(0),
            _marker: PhantomData,
        }
    }

    /// Fetches the next page.
    ///
    /// Returns `Ok(None)` once the listing is exhausted. The last page is
    /// returned even when it is empty.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request. The iterator's state is
    /// not advanced on error.
    pub async fn next(&mut self) -> Result<Option<Page<R>>, HttpError> {
        let request = match &self.state {
            State::Exhausted => return Ok(None),
            State::Fresh => HttpRequest::builder(
                HttpMethod::Get,
                Target::path(self.product, self.path.clone()),
            )
            .params(self.params.clone())
            .build()?,
            State::HasMore(cursor) => self.cursor_request(cursor)?,
        };

        tracing::debug!(
            path = %self.path,
            page = self.pages_fetched,
            "fetching page"
        );
        let envelope: R::Envelope = self.client.execute(request).await?;

        let reported = envelope.page_index();
        if let Some(expected) = self.track_page_index(reported) {
            tracing::warn!(
                path = %self.path,
                expected,
                reported = ?reported,
                "page index out of sequence"
            );
        }

        self.pages_fetched += 1;
        self.state = envelope
            .next_cursor()
            .map_or(State::Exhausted, State::HasMore);
        Ok(Some(envelope.into_page()))
    }

    /// Records the index a page reported and returns the expected index when
    /// the two disagree.
    fn track_page_index(&mut self, reported: Option<u64>) -> Option<u64> {
        let Some(index) = reported else {
            self.expected_index = self.expected_index.map(|e| e + 1);
            return None;
        };
        let mismatch = self.expected_index.filter(|&e| e != index);
        self.expected_index = Some(index + 1);
        mismatch
    }

    fn cursor_request(&self, cursor: &Cursor) -> Result<HttpRequest, InvalidHttpRequestError> {
        match cursor {
            Cursor::NextPageUri(uri) => {
                let target = if uri.starts_with("http://") || uri.starts_with("https://") {
                    Target::Url(uri.clone())
                } else {
                    Target::path(self.product, uri.clone())
                };
                HttpRequest::builder(HttpMethod::Get, target).build()
            }
            Cursor::NextPageUrl(url) => {
                let parsed = reqwest::Url::parse(url)
                    .map_err(|_| InvalidHttpRequestError::InvalidUrl { url: url.clone() })?;
                let params: Params = parsed
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect();
                HttpRequest::builder(
                    HttpMethod::Get,
                    Target::path(self.product, self.path.clone()),
                )
                .params(params)
                .build()
            }
        }
    }

    /// Returns `true` once no further page can be fetched.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    /// Returns the number of pages fetched so far.
    #[must_use]
    pub const fn pages_fetched(&self) -> u64 {
        self.pages_fetched
    }

    /// Returns the cursor the next fetch will use, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<&Cursor> {
        match &self.state {
            State::HasMore(cursor) => Some(cursor),
            State::Fresh | State::Exhausted => None,
        }
    }

    /// Continues a listing from a previously saved cursor.
    ///
    /// Page index checks are skipped for the first page fetched afterwards.
    pub fn resume_from(&mut self, cursor: Cursor) {
        self.state = State::HasMore(cursor);
        self.expected_index = None;
    }

    /// Fetches every remaining page and returns all records.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`]; records fetched before it are dropped.
    pub async fn collect_all(&mut self) -> Result<Vec<R>, HttpError> {
        let mut items = Vec::new();
        while let Some(page) = self.next().await? {
            items.extend(page.items);
        }
        Ok(items)
    }

    pub(crate) fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}
