//! Query history filtering, sorting, and retention.
//!
//! This module is the engine behind the history view of the query editor:
//! given the entries the storage collaborator has loaded and the filter
//! parameters the user has picked, it produces the listing to display.
//!
//! # Features
//!
//! - Retention-window boundary computation with day granularity
//! - Time-window, data-source, and free-text filtering
//! - Stable sorting by run time or data-source name
//! - A composed filter-and-sort pipeline for the history view
//!
//! # Example
//!
//! ```
//! use query_history::history::{filter_and_sort, HistoryEntry, SortOrder, SubQuery};
//!
//! let query = SubQuery::new().with_field("expr", "up");
//! let entries = vec![HistoryEntry::new("Prometheus", vec![query])];
//!
//! let listing = filter_and_sort(SortOrder::Descending, &[], "up", None, &entries);
//! assert_eq!(listing.len(), 1);
//! ```

pub mod models;
pub mod retention;
pub mod search;
pub mod sort;

// Re-export commonly used types
pub use models::{
    decode_entries, encode_entries, HistoryEntry, HistoryError, SubQuery, METADATA_FIELDS,
};
pub use retention::{retention_period_boundary, retention_period_boundary_at};
pub use search::{
    filter_and_sort, filter_and_sort_at, filter_by_datasource, filter_by_search, filter_by_time,
    filter_by_time_at,
};
pub use sort::{sort_entries, SortOrder};
