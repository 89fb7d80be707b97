use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One player in the tournament field. Strokes-gained fields the feed leaves
/// out count as 0 in all downstream math.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Player {
    pub player_name: String,
    #[serde(default)]
    pub sg_total: f64,
    #[serde(default)]
    pub sg_ott: f64,
    #[serde(default)]
    pub sg_app: f64,
    #[serde(default)]
    pub sg_arg: f64,
    #[serde(default)]
    pub sg_putt: f64,
}

/// Live snapshot of the current event's field.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FieldSnapshot {
    pub event_name: Option<String>,
    pub current_round: Option<i64>,
    pub field: Vec<Player>,
}

/// Tournament lifecycle stage, derived from `current_round`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Pre,
    Live,
    Post,
}

/// Keys the feed has been seen using for the roster list, tried in order.
const ROSTER_KEYS: [&str; 2] = ["field", "players"];

/// Unwrap the field snapshot from the field-updates payload. Absent or
/// malformed nesting yields a default (empty) snapshot.
#[must_use]
pub fn field_snapshot_from_payload(payload: Option<&Value>) -> FieldSnapshot {
    let Some(data) = payload.and_then(|v| v.get("data")) else {
        return FieldSnapshot::default();
    };

    let empty_vec: Vec<Value> = Vec::new();
    let roster = ROSTER_KEYS
        .iter()
        .find_map(|key| data.get(key).and_then(Value::as_array))
        .unwrap_or(&empty_vec);

    FieldSnapshot {
        event_name: data
            .get("event_name")
            .and_then(Value::as_str)
            .map(String::from),
        current_round: data.get("current_round").and_then(Value::as_i64),
        field: roster
            .iter()
            .filter_map(|p| serde_json::from_value(p.clone()).ok())
            .collect(),
    }
}
