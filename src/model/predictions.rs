use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One player's win / top-10 probabilities, both in [0, 1]. Source order is
/// already win-probability-descending.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PredictionEntry {
    pub player_name: String,
    #[serde(default)]
    pub win: f64,
    #[serde(default)]
    pub top_10: f64,
}

fn entries_under(payload: Option<&Value>, key: &str) -> Vec<PredictionEntry> {
    let empty_vec: Vec<Value> = Vec::new();
    payload
        .and_then(|v| v.get("data"))
        .and_then(|v| v.get(key))
        .and_then(Value::as_array)
        .unwrap_or(&empty_vec)
        .iter()
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect()
}

/// Unwrap pre-tournament predictions from `data.baseline`. Absent nesting
/// yields an empty list.
#[must_use]
pub fn baseline_predictions(payload: Option<&Value>) -> Vec<PredictionEntry> {
    entries_under(payload, "baseline")
}

/// Unwrap in-play predictions from `data.data`. Absent nesting yields an
/// empty list.
#[must_use]
pub fn in_play_predictions(payload: Option<&Value>) -> Vec<PredictionEntry> {
    entries_under(payload, "data")
}
