//! Search and filtering for query history.
//!
//! This module provides the filter primitives the history UI composes:
//! a retention time-window filter, a data-source filter, and free-text
//! search over comments and sub-query fields, plus [`filter_and_sort`],
//! the composed pipeline driving all of them.
//!
//! All functions are pure: they take a slice of entries and return a new
//! vector, never mutating the input. The time filter depends on the wall
//! clock through the retention boundaries; the `_at` variants take `now`
//! explicitly so callers and tests stay deterministic.

use super::models::HistoryEntry;
use super::retention::retention_period_boundary_at;
use super::sort::{sort_entries, SortOrder};
use chrono::{DateTime, Local, TimeZone};

/// Keeps entries that fall inside a retention time window, relative to
/// the current local time.
///
/// See [`filter_by_time_at`] for the window semantics.
pub fn filter_by_time(time_filter: [u32; 2], entries: &[HistoryEntry]) -> Vec<HistoryEntry> {
    filter_by_time_at(time_filter, entries, &Local::now())
}

/// Keeps entries that fall inside a retention time window, relative to an
/// explicit `now`.
///
/// `time_filter` is `[newest_days_ago, oldest_days_ago]`: the window
/// spans from the start of the day `oldest_days_ago` days ago up to the
/// end of the day `newest_days_ago` days ago. Entries sitting exactly on
/// either boundary are excluded, so consecutive windows never count a
/// day-transition entry twice.
///
/// # Arguments
///
/// * `time_filter` - `[newest_days_ago, oldest_days_ago]` day counts
/// * `entries` - The history entries to filter
/// * `now` - The reference instant for the retention boundaries
///
/// # Returns
///
/// A vector of entries strictly inside the window, in their original
/// order.
pub fn filter_by_time_at<Tz: TimeZone>(
    time_filter: [u32; 2],
    entries: &[HistoryEntry],
    now: &DateTime<Tz>,
) -> Vec<HistoryEntry> {
    let last_ts = retention_period_boundary_at(time_filter[0], true, now);
    let first_ts = retention_period_boundary_at(time_filter[1], false, now);

    entries
        .iter()
        .filter(|entry| entry.ts < last_ts && entry.ts > first_ts)
        .cloned()
        .collect()
}

/// Keeps entries originating from one of the given data sources.
///
/// An empty filter list means "no restriction" and returns every entry;
/// this is observable behavior existing callers rely on. Matching is
/// case-sensitive and exact.
///
/// # Arguments
///
/// * `names` - Data-source names to keep; empty keeps everything
/// * `entries` - The history entries to filter
///
/// # Returns
///
/// A vector of entries whose data source is in `names`, in their
/// original order.
pub fn filter_by_datasource(names: &[String], entries: &[HistoryEntry]) -> Vec<HistoryEntry> {
    if names.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| names.iter().any(|name| *name == entry.datasource_name))
        .cloned()
        .collect()
}

/// Keeps entries matching a free-text search.
///
/// An entry matches if its comment contains `needle` as a substring, or
/// if any searchable field of any of its sub-queries does (metadata
/// fields are excluded; see
/// [`METADATA_FIELDS`](super::models::METADATA_FIELDS)). Matching is
/// case-sensitive; an empty `needle` matches every entry.
///
/// # Arguments
///
/// * `needle` - The search term
/// * `entries` - The history entries to search through
///
/// # Returns
///
/// A vector of matching entries, in their original order.
pub fn filter_by_search(needle: &str, entries: &[HistoryEntry]) -> Vec<HistoryEntry> {
    if needle.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| matches_search(entry, needle))
        .cloned()
        .collect()
}

/// Checks if a history entry matches the given search term, through its
/// comment or any of its sub-queries.
fn matches_search(entry: &HistoryEntry, needle: &str) -> bool {
    if entry.comment.contains(needle) {
        return true;
    }

    entry.queries.iter().any(|query| query.matches(needle))
}

/// Runs the full history listing pipeline, relative to the current local
/// time.
///
/// See [`filter_and_sort_at`].
pub fn filter_and_sort(
    order: SortOrder,
    datasource_filters: &[String],
    search: &str,
    time_filter: Option<[u32; 2]>,
    entries: &[HistoryEntry],
) -> Vec<HistoryEntry> {
    filter_and_sort_at(
        order,
        datasource_filters,
        search,
        time_filter,
        entries,
        &Local::now(),
    )
}

/// Runs the full history listing pipeline, relative to an explicit `now`.
///
/// Applies the data-source filter, then the search filter, then (when a
/// window is given) the retention time filter, and finally sorts the
/// result. This is the operation the history view drives; the individual
/// filters are exposed for callers that need only one of them.
///
/// # Arguments
///
/// * `order` - Ordering for the final listing
/// * `datasource_filters` - Data-source names to keep; empty keeps all
/// * `search` - Free-text search term; empty matches all
/// * `time_filter` - Optional `[newest_days_ago, oldest_days_ago]` window
/// * `entries` - The history entries to list
/// * `now` - The reference instant for the retention boundaries
pub fn filter_and_sort_at<Tz: TimeZone>(
    order: SortOrder,
    datasource_filters: &[String],
    search: &str,
    time_filter: Option<[u32; 2]>,
    entries: &[HistoryEntry],
    now: &DateTime<Tz>,
) -> Vec<HistoryEntry> {
    let by_datasource = filter_by_datasource(datasource_filters, entries);
    let by_search = filter_by_search(search, &by_datasource);
    let windowed = match time_filter {
        Some(window) => filter_by_time_at(window, &by_search, now),
        None => by_search,
    };
    sort_entries(order, &windowed)
}
