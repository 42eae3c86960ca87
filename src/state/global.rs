//! Global Application State
//!
//! Reactive state shared across the component tree, plus the snapshot data
//! model polled from the backend.
//!
//! Snapshot decoding is deliberately lenient: the backend is a moving target
//! and a single mangled field must not take the dashboard down. Every field
//! falls back to its default when missing or malformed, so a snapshot always
//! renders.

use std::collections::HashMap;

use leptos::*;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One polled read of the crowd state.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    /// Aggregate count across all zones
    #[serde(default, deserialize_with = "de_count")]
    pub total: u32,
    /// Alert trigger level currently configured on the backend
    #[serde(default, deserialize_with = "de_count")]
    pub threshold: u32,
    /// Occupancy per zone id (wire keys are always strings)
    #[serde(default, deserialize_with = "de_zone_counts")]
    pub zones: HashMap<String, u32>,
    /// Chronological history window, rendered verbatim as the time axis
    #[serde(default, deserialize_with = "de_history")]
    pub history: Vec<HistoryEntry>,
    /// Zone ids currently over threshold; the wire form mixes numbers and
    /// strings, normalized here to strings matching the `zones` keys
    #[serde(default, deserialize_with = "de_zone_ids")]
    pub alerts: Vec<String>,
}

/// One history sample: a timestamp label and the per-zone counts at that
/// moment.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub time: String,
    #[serde(default, deserialize_with = "de_zone_counts")]
    pub zones: HashMap<String, u32>,
}

/// A registered user as reported by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn de_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_count(&value).unwrap_or(0))
}

fn de_zone_counts<'de, D>(deserializer: D) -> Result<HashMap<String, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let counts = match value.as_object() {
        Some(object) => object
            .iter()
            .filter_map(|(id, count)| as_count(count).map(|n| (id.clone(), n)))
            .collect(),
        None => HashMap::new(),
    };
    Ok(counts)
}

fn de_history<'de, D>(deserializer: D) -> Result<Vec<HistoryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let entries = match value {
        Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

fn de_zone_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

fn as_count(value: &Value) -> Option<u32> {
    value.as_u64().map(|n| n.min(u64::from(u32::MAX)) as u32)
}

/// Global dashboard state provided to all components.
#[derive(Clone)]
pub struct DashboardState {
    /// Most recent snapshot; `None` until the first successful poll
    pub snapshot: RwSignal<Option<Snapshot>>,
    /// Whether the most recent poll tick succeeded
    pub connected: RwSignal<bool>,
    /// Timestamp (ms) of the last successful poll
    pub last_update: RwSignal<Option<i64>>,
    /// Registered users, once fetched from the admin panel
    pub users: RwSignal<Option<Vec<UserInfo>>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Informational message, for empty-result conditions that are not errors
    pub info: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_dashboard_state() {
    let state = DashboardState {
        snapshot: create_rw_signal(None),
        connected: create_rw_signal(false),
        last_update: create_rw_signal(None),
        users: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        info: create_rw_signal(None),
    };
    provide_context(state);
}

impl DashboardState {
    /// Publish a freshly polled snapshot, replacing everything rendered
    pub fn apply_snapshot(&self, snapshot: Snapshot) {
        self.snapshot.set(Some(snapshot));
        self.connected.set(true);
        self.last_update.set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Record a failed poll tick; the displayed snapshot is left untouched
    pub fn mark_offline(&self) {
        self.connected.set(false);
    }

    /// Show a success message (auto-clears after 3 seconds)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));
        let success = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after 5 seconds)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));
        let error = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error.set(None);
        })
        .forget();
    }

    /// Show an informational message (auto-clears after 4 seconds)
    pub fn show_info(&self, message: &str) {
        self.info.set(Some(message.to_string()));
        let info = self.info;
        gloo_timers::callback::Timeout::new(4000, move || {
            info.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_decodes_full_payload() {
        let raw = r#"{
            "total": 17,
            "threshold": 20,
            "zones": {"2": 5, "1": 12},
            "history": [
                {"time": "10:15:01", "total": 16, "zones": {"1": 11, "2": 5}},
                {"time": "10:15:02", "total": 17, "zones": {"1": 12, "2": 5}}
            ],
            "alerts": [2]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.total, 17);
        assert_eq!(snapshot.threshold, 20);
        assert_eq!(snapshot.zones.get("1"), Some(&12));
        assert_eq!(snapshot.zones.get("2"), Some(&5));
        assert_eq!(snapshot.history.len(), 2);
        assert_eq!(snapshot.history[0].time, "10:15:01");
        assert_eq!(snapshot.history[1].zones.get("1"), Some(&12));
        assert_eq!(snapshot.alerts, vec!["2".to_string()]);
    }

    #[test]
    fn test_snapshot_defaults_missing_fields() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.total, 0);
        assert_eq!(snapshot.threshold, 0);
        assert!(snapshot.zones.is_empty());
        assert!(snapshot.history.is_empty());
        assert!(snapshot.alerts.is_empty());
    }

    #[test]
    fn test_snapshot_tolerates_malformed_fields() {
        let raw = r#"{
            "total": "many",
            "threshold": -3,
            "zones": [1, 2],
            "history": {"nope": 1},
            "alerts": "zone 1"
        }"#;
        let snapshot: Snapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.total, 0);
        assert_eq!(snapshot.threshold, 0);
        assert!(snapshot.zones.is_empty());
        assert!(snapshot.history.is_empty());
        assert!(snapshot.alerts.is_empty());
    }

    #[test]
    fn test_zone_counts_drop_non_numeric_values() {
        let raw = r#"{"zones": {"1": 4, "2": "full", "3": 0}}"#;
        let snapshot: Snapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.zones.len(), 2);
        assert_eq!(snapshot.zones.get("1"), Some(&4));
        assert_eq!(snapshot.zones.get("3"), Some(&0));
        assert!(!snapshot.zones.contains_key("2"));
    }

    #[test]
    fn test_alert_ids_normalize_numbers_and_strings() {
        let raw = r#"{"alerts": [3, "1", 2, null]}"#;
        let snapshot: Snapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.alerts, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_history_drops_entries_that_are_not_objects() {
        let raw = r#"{"history": [{"time": "09:00:00", "zones": {"1": 4}}, 42, "bad"]}"#;
        let snapshot: Snapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.history.len(), 1);
        assert_eq!(snapshot.history[0].zones.get("1"), Some(&4));
    }

    #[test]
    fn test_user_info_tolerates_missing_created_at() {
        let raw = r#"[{"username": "amit", "role": "admin", "created_at": "2025-06-01"},
                      {"username": "guest", "role": "viewer"}]"#;
        let users: Vec<UserInfo> = serde_json::from_str(raw).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].created_at.as_deref(), Some("2025-06-01"));
        assert_eq!(users[1].created_at, None);
    }
}
