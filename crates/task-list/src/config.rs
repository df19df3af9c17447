//! Tracker Configuration

use log::LevelFilter;
use serde::Deserialize;

/// Tunables for the tracker. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    /// `localStorage` key holding the JSON task array
    pub storage_key: String,
    /// Delay between a delete request and the actual removal
    pub removal_delay_ms: u32,
    /// How long a notification stays fully visible
    pub notification_ms: u32,
    pub notification_fade_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: "todo-tasks".to_string(),
            removal_delay_ms: 300,
            notification_ms: 3000,
            notification_fade_ms: 300,
            log_level: LevelFilter::Info,
        }
    }
}

impl TrackerConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.storage_key, "todo-tasks");
        assert_eq!(config.removal_delay_ms, 300);
        assert_eq!(config.notification_ms, 3000);
    }

    #[test]
    fn test_partial_override() {
        let config = TrackerConfig::from_json(r#"{"storageKey":"work-tasks","logLevel":"debug"}"#).unwrap();
        assert_eq!(config.storage_key, "work-tasks");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.removal_delay_ms, 300);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(TrackerConfig::from_json("{\"removalDelayMs\": -1}").is_err());
    }
}
