//! Settings schema for the query history view.
//!
//! This module defines the resolved history preferences and the mapping
//! from their logical names to the storage keys the settings-storage
//! collaborator persists them under.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Longest retention window the history view offers, in days.
///
/// Matches the largest option in the retention-period picker; values
/// above it are rejected by validation rather than silently clamped.
pub const MAX_RETENTION_PERIOD_DAYS: u32 = 14;

/// Storage keys for the persisted history preferences, by logical name.
///
/// Built once and handed by reference to the settings-storage
/// collaborator; this crate never reads or writes storage itself.
pub static SETTING_KEYS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut keys = HashMap::new();
    keys.insert(
        "retentionPeriod",
        "grafana.explore.richHistory.retentionPeriod",
    );
    keys.insert(
        "starredTabAsFirstTab",
        "grafana.explore.richHistory.starredTabAsFirstTab",
    );
    keys.insert(
        "activeDatasourceOnly",
        "grafana.explore.richHistory.activeDatasourceOnly",
    );
    keys.insert(
        "datasourceFilters",
        "grafana.explore.richHistory.datasourceFilters",
    );
    keys
});

/// Resolved history preferences consumed by the filter pipeline.
///
/// These are the values behind [`SETTING_KEYS`] after the storage
/// collaborator has read and decoded them. Missing or invalid settings
/// fall back to sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySettings {
    /// How many days of history the view keeps, counting back from today.
    ///
    /// Defaults to 7. Must not exceed [`MAX_RETENTION_PERIOD_DAYS`].
    #[serde(default = "default_retention_period")]
    pub retention_period: u32,

    /// Whether the starred tab is shown before the history tab.
    ///
    /// Purely a presentation preference; carried here so the collaborator
    /// has a single resolved-settings record. Defaults to false.
    #[serde(default = "default_starred_tab_as_first_tab")]
    pub starred_tab_as_first_tab: bool,

    /// Whether the view is restricted to the active data source.
    ///
    /// When set, the caller passes only the active data source's name in
    /// the filter list. Defaults to false.
    #[serde(default = "default_active_datasource_only")]
    pub active_datasource_only: bool,

    /// Data-source names the listing is filtered to.
    ///
    /// Empty means no restriction. Defaults to empty.
    #[serde(default = "default_datasource_filters")]
    pub datasource_filters: Vec<String>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            retention_period: default_retention_period(),
            starred_tab_as_first_tab: default_starred_tab_as_first_tab(),
            active_datasource_only: default_active_datasource_only(),
            datasource_filters: default_datasource_filters(),
        }
    }
}

impl HistorySettings {
    /// Validates the settings and returns errors if any value is invalid.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive
    /// error message.
    pub fn validate(&self) -> Result<(), String> {
        if self.retention_period > MAX_RETENTION_PERIOD_DAYS {
            return Err(format!(
                "retentionPeriod must be at most {} days",
                MAX_RETENTION_PERIOD_DAYS
            ));
        }

        // datasource_filters may be empty (no restriction), so no validation needed

        Ok(())
    }

    /// The retention time window in the form the time filter expects.
    ///
    /// # Returns
    ///
    /// `[newest_days_ago, oldest_days_ago]` covering today back through
    /// the configured retention period.
    pub fn retention_window(&self) -> [u32; 2] {
        [0, self.retention_period]
    }
}

// Default value functions for serde

fn default_retention_period() -> u32 {
    7 // one week of history
}

fn default_starred_tab_as_first_tab() -> bool {
    false
}

fn default_active_datasource_only() -> bool {
    false
}

fn default_datasource_filters() -> Vec<String> {
    Vec::new()
}
