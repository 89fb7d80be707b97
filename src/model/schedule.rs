use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One event on the season schedule. Source ordering is not guaranteed
/// chronological.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScheduleEntry {
    pub event_name: String,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
}

impl ScheduleEntry {
    /// Start date as a calendar date, if the feed supplied a parseable one.
    #[must_use]
    pub fn parsed_start(&self) -> Option<NaiveDate> {
        self.start_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}

/// Unwrap `data.schedule` from the schedule payload. Absent or malformed
/// nesting yields an empty list, never an error.
#[must_use]
pub fn schedule_from_payload(payload: Option<&Value>) -> Vec<ScheduleEntry> {
    let empty_vec: Vec<Value> = Vec::new();
    payload
        .and_then(|v| v.get("data"))
        .and_then(|v| v.get("schedule"))
        .and_then(Value::as_array)
        .unwrap_or(&empty_vec)
        .iter()
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect()
}
