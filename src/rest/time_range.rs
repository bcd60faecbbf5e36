//! Listing records created within a time window.
//!
//! The API filters on whole days only (`StartTime>=2024-01-01`), so a
//! [`TimeRangeIterator`] widens the requested window to the days it touches
//! and pages through the result. Records near the edges may fall outside the
//! exact window; [`TimeRange::contains`] is there for callers that need exact
//! bounds.

use chrono::{DateTime, Days, Timelike, Utc};

use crate::clients::{HttpError, InvalidHttpRequestError, Params};
use crate::rest::{ListResource, Page, PageIterator};
use crate::types::SEARCH_DAY_LAYOUT;

/// A half-open window `[start, end)`.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use twilio_api::rest::TimeRange;
///
/// let range = TimeRange::new(
///     Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// assert!(range.contains(Utc.with_ymd_and_hms(2024, 3, 2, 11, 59, 59).unwrap()));
/// assert!(!range.contains(Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a window.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidTimeRange`] if `start` is
    /// after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, InvalidHttpRequestError> {
        if start > end {
            return Err(InvalidHttpRequestError::InvalidTimeRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the exclusive end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` if `time` lies within the window.
    #[must_use]
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        self.start <= time && time < self.end
    }

    /// Returns the first and last day the API filter must include.
    ///
    /// An end at exactly midnight excludes that day.
    #[must_use]
    pub fn days(&self) -> (String, String) {
        let first = self.start.date_naive();
        let mut last = self.end.date_naive();
        let at_midnight = self.end.num_seconds_from_midnight() == 0 && self.end.nanosecond() == 0;
        if at_midnight && self.end > self.start {
            last = last.checked_sub_days(Days::new(1)).unwrap_or(last);
        }
        (
            first.format(SEARCH_DAY_LAYOUT).to_string(),
            last.format(SEARCH_DAY_LAYOUT).to_string(),
        )
    }

    /// Writes the day filters for `field` into `params`.
    ///
    /// Existing filters on `field` and any explicit `Page`/`PageToken` are
    /// removed first. The encoded names `{field}>` and `{field}<` read as
    /// `>=` and `<=` on the wire.
    pub fn apply(&self, field: &str, params: &mut Params) {
        params.remove_where(|name| {
            name == "Page"
                || name == "PageToken"
                || name
                    .strip_prefix(field)
                    .is_some_and(|rest| rest.is_empty() || rest == ">" || rest == "<")
        });
        let (first, last) = self.days();
        params.add(format!("{field}>"), first);
        params.add(format!("{field}<"), last);
    }
}

/// A [`PageIterator`] restricted to a [`TimeRange`].
///
/// Iteration ends at the first empty page as well as when the cursor runs
/// out.
#[derive(Debug)]
pub struct TimeRangeIterator<'c, R> {
    inner: PageIterator<'c, R>,
    range: TimeRange,
    done: bool,
}

impl<'c, R: ListResource> TimeRangeIterator<'c, R> {
    /// Wraps a fresh iterator, filtering `field` by `range`.
    #[must_use]
    pub fn new(mut inner: PageIterator<'c, R>, field: &str, range: TimeRange) -> Self {
        range.apply(field, inner.params_mut());
        Self {
            inner,
            range,
            done: false,
        }
    }

    /// Returns the requested window.
    #[must_use]
    pub const fn range(&self) -> &TimeRange {
        &self.range
    }

    /// Returns `true` once no further page will be returned.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.done || self.inner.is_exhausted()
    }

    /// Fetches the next page.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request; state is not advanced.
    pub async fn next(&mut self) -> Result<Option<Page<R>>, HttpError> {
        if self.done {
            return Ok(None);
        }
        match self.inner.next().await? {
            Some(page) if page.is_empty() => {
                self.done = true;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Fetches every remaining page and returns all records.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`].
    pub async fn collect_all(&mut self) -> Result<Vec<R>, HttpError> {
        let mut items = Vec::new();
        while let Some(page) = self.next().await? {
            items.extend(page.items);
        }
        Ok(items)
    }
}
