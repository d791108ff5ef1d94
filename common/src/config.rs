use crate::constants::{
    ADVANCE_INTERVAL_SECONDS, AUTO_END_DELAY_SECONDS, MAX_ACTIVITIES, REJECTION_PROBABILITY,
};
use crate::errors::ConfigError;
use crate::script::DeliveryScript;
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Settings of the tracker, loaded from a JSON file.
///
/// Every field is optional; a missing field keeps the built-in value.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Time between two simulated steps.
    #[serde(rename = "advance_interval_secs")]
    #[serde_as(as = "DurationSeconds<u64>")]
    pub advance_interval: Duration,
    /// Time a delivered activity stays on screen before it is ended.
    #[serde(rename = "auto_end_delay_secs")]
    #[serde_as(as = "DurationSeconds<u64>")]
    pub auto_end_delay: Duration,
    pub activities_enabled: bool,
    pub max_activities: usize,
    /// Chance that the console center refuses a new activity.
    pub rejection_probability: f32,
    pub script: DeliveryScript,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            advance_interval: Duration::from_secs(ADVANCE_INTERVAL_SECONDS),
            auto_end_delay: Duration::from_secs(AUTO_END_DELAY_SECONDS),
            activities_enabled: true,
            max_activities: MAX_ACTIVITIES,
            rejection_probability: REJECTION_PROBABILITY,
            script: DeliveryScript::mock(),
        }
    }
}

impl TrackerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::delivery_status::DeliveryStatus;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = TrackerConfig::from_json("{}").unwrap();
        assert!(config.activities_enabled);
        assert_eq!(config.max_activities, MAX_ACTIVITIES);
        assert_eq!(config.rejection_probability, 0.0);
        assert_eq!(config.advance_interval, Duration::from_secs(30));
        assert_eq!(config.auto_end_delay, Duration::from_secs(10));
        assert_eq!(config.script.len(), 5);
    }

    #[test]
    fn test_overrides_timings_and_script() {
        let json = r#"{
            "advance_interval_secs": 5,
            "auto_end_delay_secs": 2,
            "max_activities": 3,
            "script": [
                {"status": "preparing", "order_number": "77"},
                {"status": "delivered", "order_number": "77", "estimated_time": "Entregue"}
            ]
        }"#;
        let config = TrackerConfig::from_json(json).unwrap();
        assert_eq!(config.advance_interval, Duration::from_secs(5));
        assert_eq!(config.auto_end_delay, Duration::from_secs(2));
        assert_eq!(config.max_activities, 3);
        assert!(config.activities_enabled);
        assert_eq!(config.script.last_index(), 1);
        assert_eq!(
            config.script.first_with_status(DeliveryStatus::Delivered).order_number,
            "77"
        );
    }

    #[test]
    fn test_empty_script_is_a_config_error() {
        let result = TrackerConfig::from_json(r#"{"script": []}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TrackerConfig::from_file("/nonexistent/tracker.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
