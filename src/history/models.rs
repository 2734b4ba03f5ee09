//! Data models for query history.
//!
//! This module defines the core data structures for query history entries
//! and the sub-queries they carry, plus the JSON boundary used by the
//! storage collaborator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Sub-query field names that hold routing metadata rather than user input.
///
/// These fields identify where and how a sub-query runs (data source,
/// panel wiring, visibility) and are excluded from free-text search so
/// that searching for e.g. a ref id does not match every entry.
pub const METADATA_FIELDS: &[&str] = &["datasource", "key", "refId", "hide", "queryType"];

/// A single entry in the query history.
///
/// Represents one run of a (possibly multi-query) editor state against a
/// data source, with metadata for searching, filtering, and organization.
///
/// Entries are created and persisted by the storage collaborator; the
/// filter and sort functions in this crate treat them as read-only and
/// always return fresh collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique identifier for this history entry.
    ///
    /// Generated using UUID v4 for guaranteed uniqueness.
    pub id: String,

    /// Timestamp when the query was run, as Unix milliseconds.
    ///
    /// Always non-negative; millisecond precision matches the persisted
    /// record format.
    pub ts: i64,

    /// Name of the data source the query ran against.
    pub datasource_name: String,

    /// Whether the user has starred this entry.
    ///
    /// Carried for lossless round-trips through storage; the filter
    /// functions here never act on it.
    #[serde(default)]
    pub starred: bool,

    /// Free-text annotation attached by the user, possibly empty.
    #[serde(default)]
    pub comment: String,

    /// The sub-queries that made up this run, in editor order.
    ///
    /// May be empty for entries recorded before a query was entered.
    #[serde(default)]
    pub queries: Vec<SubQuery>,
}

impl HistoryEntry {
    /// Creates a new history entry for a query run happening now.
    ///
    /// # Arguments
    ///
    /// * `datasource_name` - Name of the data source the query ran against
    /// * `queries` - The sub-queries of the run, in editor order
    ///
    /// # Returns
    ///
    /// A new `HistoryEntry` with a unique ID, the current timestamp, no
    /// comment, and the starred flag cleared.
    pub fn new(datasource_name: impl Into<String>, queries: Vec<SubQuery>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            ts: chrono::Utc::now().timestamp_millis(),
            datasource_name: datasource_name.into(),
            starred: false,
            comment: String::new(),
            queries,
        }
    }

    /// Returns this entry with the given comment attached.
    ///
    /// # Arguments
    ///
    /// * `comment` - The annotation text
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Returns this entry with the starred flag set.
    pub fn star(mut self) -> Self {
        self.starred = true;
        self
    }
}

/// A single query object inside a history entry.
///
/// Sub-queries are field bags: a mapping of field names to arbitrary JSON
/// values, because every data source defines its own query shape. A fixed
/// set of well-known metadata fields ([`METADATA_FIELDS`]) is excluded
/// from free-text search; everything else is treated as a displayable
/// value and searched through its display string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubQuery {
    fields: Map<String, Value>,
}

impl SubQuery {
    /// Creates an empty sub-query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sub-query from an arbitrary JSON value.
    ///
    /// # Arguments
    ///
    /// * `value` - The JSON value; must be an object
    ///
    /// # Returns
    ///
    /// The sub-query, or `HistoryError::InvalidArgument` if `value` is not
    /// a JSON object.
    pub fn from_value(value: Value) -> Result<Self, HistoryError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(HistoryError::InvalidArgument {
                parameter: "sub-query",
                value: other.to_string(),
            }),
        }
    }

    /// Sets a field, returning the sub-query for chaining.
    ///
    /// # Arguments
    ///
    /// * `name` - Field name
    /// * `value` - Field value; anything convertible to a JSON value
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Looks up a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the number of fields, metadata included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the sub-query has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Checks whether any searchable field of this sub-query contains
    /// `needle` as a case-sensitive substring.
    ///
    /// Metadata fields are skipped, `null` values never match, and
    /// non-string values match on their JSON text.
    ///
    /// # Arguments
    ///
    /// * `needle` - The search term
    ///
    /// # Returns
    ///
    /// `true` if at least one searchable field value matches.
    pub fn matches(&self, needle: &str) -> bool {
        self.fields
            .iter()
            .filter(|(name, _)| !METADATA_FIELDS.contains(&name.as_str()))
            .filter_map(|(_, value)| display_string(value))
            .any(|text| text.contains(needle))
    }
}

/// Converts a sub-query field value to the string used for searching.
///
/// Strings are used verbatim; `null` has no display form and yields
/// `None`; every other value uses its compact JSON text.
fn display_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Encodes a history to the persisted JSON array form.
///
/// This is the serialization boundary used by the storage collaborator;
/// the crate itself never touches storage.
///
/// # Arguments
///
/// * `entries` - The history entries to encode
///
/// # Returns
///
/// A JSON string, or `HistoryError::Serialization` on failure.
pub fn encode_entries(entries: &[HistoryEntry]) -> Result<String, HistoryError> {
    serde_json::to_string(entries).map_err(HistoryError::from)
}

/// Decodes a history from the persisted JSON array form.
///
/// # Arguments
///
/// * `json` - A JSON array of history entries
///
/// # Returns
///
/// The decoded entries, or `HistoryError::Serialization` if the JSON is
/// malformed or does not match the entry shape.
pub fn decode_entries(json: &str) -> Result<Vec<HistoryEntry>, HistoryError> {
    serde_json::from_str(json).map_err(HistoryError::from)
}

/// Errors that can occur during history operations.
#[derive(Debug)]
pub enum HistoryError {
    /// A caller-supplied value was outside the accepted set.
    ///
    /// Carries the logical parameter name and the rejected value.
    InvalidArgument {
        /// Logical name of the rejected parameter
        parameter: &'static str,
        /// The rejected value, rendered for display
        value: String,
    },

    /// Error occurred during serialization or deserialization.
    ///
    /// Contains the underlying serde_json error.
    Serialization(serde_json::Error),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::InvalidArgument { parameter, value } => {
                write!(f, "Invalid {}: {:?}", parameter, value)
            }
            HistoryError::Serialization(err) => {
                write!(f, "History serialization error: {}", err)
            }
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::InvalidArgument { .. } => None,
            HistoryError::Serialization(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self {
        HistoryError::Serialization(err)
    }
}
