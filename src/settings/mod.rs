//! History preference loading for the settings-storage collaborator.
//!
//! This module resolves raw persisted settings into the typed
//! [`HistorySettings`] record the filter pipeline consumes. Settings are
//! read from a JSON object under the "queryHistory" key and merged with
//! defaults; the storage keys themselves live in
//! [`schema::SETTING_KEYS`].

pub mod schema;

pub use schema::{HistorySettings, MAX_RETENTION_PERIOD_DAYS, SETTING_KEYS};

use serde_json::Value;

/// Loads history settings from a raw settings object.
///
/// Reads the "queryHistory" settings, merges them with defaults, and
/// validates the result. Unparsable user values fall back to defaults
/// with a warning; validation failures are surfaced to the caller.
///
/// # Arguments
///
/// * `settings_json` - Optional JSON value containing user settings under
///   the "queryHistory" key
///
/// # Returns
///
/// `Ok(HistorySettings)` with the loaded settings, or `Err` if validation
/// fails.
///
/// # Example
///
/// ```
/// use query_history::settings::load_settings;
/// use serde_json::json;
///
/// let settings = json!({
///     "queryHistory": {
///         "retentionPeriod": 14,
///         "activeDatasourceOnly": true
///     }
/// });
///
/// let loaded = load_settings(Some(settings)).unwrap();
/// assert_eq!(loaded.retention_period, 14);
/// ```
pub fn load_settings(settings_json: Option<Value>) -> Result<HistorySettings, String> {
    let mut settings = HistorySettings::default();

    if let Some(raw) = settings_json {
        // Extract query-history settings if present
        if let Some(history_settings) = raw.get("queryHistory") {
            match serde_json::from_value::<HistorySettings>(history_settings.clone()) {
                Ok(user_settings) => {
                    settings = user_settings;
                }
                Err(e) => {
                    // Warn but continue with defaults
                    eprintln!(
                        "Warning: Failed to parse queryHistory settings: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    settings
        .validate()
        .map_err(|e| format!("Invalid settings: {}. Using defaults.", e))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_settings_with_defaults() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings, HistorySettings::default());
    }

    #[test]
    fn test_load_settings_with_user_values() {
        let raw = json!({
            "queryHistory": {
                "retentionPeriod": 14,
                "starredTabAsFirstTab": true,
                "datasourceFilters": ["Prometheus", "Loki"]
            }
        });

        let settings = load_settings(Some(raw)).unwrap();
        assert_eq!(settings.retention_period, 14);
        assert_eq!(settings.starred_tab_as_first_tab, true);
        assert_eq!(settings.datasource_filters.len(), 2);
        // Untouched setting keeps its default
        assert_eq!(settings.active_datasource_only, false);
    }

    #[test]
    fn test_load_settings_partial_values() {
        let raw = json!({
            "queryHistory": {
                "retentionPeriod": 2
            }
        });

        let settings = load_settings(Some(raw)).unwrap();
        assert_eq!(settings.retention_period, 2);
        assert!(settings.datasource_filters.is_empty());
    }

    #[test]
    fn test_load_settings_invalid_json_falls_back() {
        let raw = json!({
            "queryHistory": {
                "retentionPeriod": "not-a-number"
            }
        });

        // Should fall back to defaults on parse error
        let settings = load_settings(Some(raw)).unwrap();
        assert_eq!(settings.retention_period, 7);
    }

    #[test]
    fn test_load_settings_validation_error() {
        let raw = json!({
            "queryHistory": {
                "retentionPeriod": 90
            }
        });

        let result = load_settings(Some(raw));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("retentionPeriod"));
    }

    #[test]
    fn test_load_settings_no_query_history_key() {
        let raw = json!({
            "otherFeature": {
                "someSetting": true
            }
        });

        let settings = load_settings(Some(raw)).unwrap();
        assert_eq!(settings, HistorySettings::default());
    }

    #[test]
    fn test_load_settings_empty_object() {
        let settings = load_settings(Some(json!({}))).unwrap();
        assert_eq!(settings, HistorySettings::default());
    }
}
