//! Query History Engine
//!
//! This crate provides the filtering, sorting, and retention logic behind
//! a dashboard's query-history view: given the entries the storage layer
//! has loaded and the preferences the user has picked, it produces the
//! listing to display.
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - **history**: Core data structures for history entries and the
//!   filter/sort engine operating on them
//! - **settings**: Resolved history preferences and the storage-key
//!   mapping handed to the settings-storage collaborator
//!
//! # Design
//!
//! The engine is a pure library: it performs no I/O, holds no shared
//! state, and never mutates caller-supplied collections. Persistence and
//! rendering belong to external collaborators; the only boundaries this
//! crate owns are the JSON encode/decode helpers for entry collections
//! and the typed settings loader. Wall-clock dependence is confined to
//! convenience wrappers, with `_at` variants taking an explicit `now` so
//! behavior stays reproducible under test.
//!
//! # Usage
//!
//! ```
//! use query_history::history::{filter_and_sort, HistoryEntry, SortOrder, SubQuery};
//! use query_history::settings::load_settings;
//!
//! let settings = load_settings(None).unwrap();
//!
//! let query = SubQuery::new()
//!     .with_field("refId", "A")
//!     .with_field("expr", "rate(http_requests_total[5m])");
//! let entries = vec![HistoryEntry::new("Prometheus", vec![query])];
//!
//! let listing = filter_and_sort(
//!     SortOrder::Descending,
//!     &settings.datasource_filters,
//!     "http_requests",
//!     Some(settings.retention_window()),
//!     &entries,
//! );
//! assert_eq!(listing.len(), 1);
//! ```

pub mod history;
pub mod settings;

pub use history::{
    filter_and_sort, filter_by_datasource, filter_by_search, filter_by_time, sort_entries,
    HistoryEntry, HistoryError, SortOrder, SubQuery,
};
pub use settings::{load_settings, HistorySettings};
