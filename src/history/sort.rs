//! Sort engine for query history listings.
//!
//! The history UI offers four orderings: by run time in either direction,
//! and by data-source name in either direction. The ordering a user picks
//! is persisted as a string preference, so the enum has an explicit string
//! form with a validating parse; an unrecognized persisted value is
//! rejected at that boundary instead of silently leaving entries
//! unsorted.

use super::models::{HistoryEntry, HistoryError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied to a history listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// By run time, oldest first.
    Ascending,
    /// By run time, newest first.
    Descending,
    /// By data-source name, A to Z.
    DatasourceAZ,
    /// By data-source name, Z to A.
    DatasourceZA,
}

impl SortOrder {
    /// All orderings, in the order the UI presents them.
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Descending,
        SortOrder::Ascending,
        SortOrder::DatasourceAZ,
        SortOrder::DatasourceZA,
    ];

    /// The persisted string form of this ordering.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
            SortOrder::DatasourceAZ => "datasourceAZ",
            SortOrder::DatasourceZA => "datasourceZA",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = HistoryError;

    /// Parses a persisted sort-order preference.
    ///
    /// This is the only place an out-of-set ordering can enter the
    /// engine, and it fails loudly rather than falling back to the
    /// stored order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortOrder::Ascending),
            "descending" => Ok(SortOrder::Descending),
            "datasourceAZ" => Ok(SortOrder::DatasourceAZ),
            "datasourceZA" => Ok(SortOrder::DatasourceZA),
            other => Err(HistoryError::InvalidArgument {
                parameter: "sort order",
                value: other.to_string(),
            }),
        }
    }
}

/// Sorts history entries into the given order.
///
/// The sort is stable: entries with equal keys keep their relative order
/// from the input, so re-sorting an already-sorted listing leaves it
/// unchanged. Timestamps compare numerically; data-source names compare
/// lexicographically.
///
/// # Arguments
///
/// * `order` - The ordering to apply
/// * `entries` - The history entries to sort
///
/// # Returns
///
/// A new vector with the entries in the requested order; the input is
/// not mutated.
pub fn sort_entries(order: SortOrder, entries: &[HistoryEntry]) -> Vec<HistoryEntry> {
    let mut sorted = entries.to_vec();
    match order {
        SortOrder::Ascending => sorted.sort_by(|a, b| a.ts.cmp(&b.ts)),
        SortOrder::Descending => sorted.sort_by(|a, b| b.ts.cmp(&a.ts)),
        SortOrder::DatasourceAZ => {
            sorted.sort_by(|a, b| a.datasource_name.cmp(&b.datasource_name))
        }
        SortOrder::DatasourceZA => {
            sorted.sort_by(|a, b| b.datasource_name.cmp(&a.datasource_name))
        }
    }
    sorted
}
