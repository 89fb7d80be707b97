#![allow(dead_code)] // each integration test binary uses its own subset

use serde_json::{Value, json};

use fairway_pulse::model::Player;

pub fn schedule_payload(entries: &[(&str, &str, Option<&str>)]) -> Value {
    let schedule: Vec<Value> = entries
        .iter()
        .map(|(event_name, course, start_date)| {
            json!({
                "event_name": event_name,
                "course": course,
                "start_date": start_date,
            })
        })
        .collect();

    json!({ "data": { "schedule": schedule } })
}

pub fn field_payload(event_name: &str, current_round: i64, players: &[Value]) -> Value {
    json!({
        "data": {
            "event_name": event_name,
            "current_round": current_round,
            "field": players,
        }
    })
}

pub fn player_json(name: &str, total: f64, ott: f64, app: f64, arg: f64, putt: f64) -> Value {
    json!({
        "player_name": name,
        "sg_total": total,
        "sg_ott": ott,
        "sg_app": app,
        "sg_arg": arg,
        "sg_putt": putt,
    })
}

pub fn baseline_payload(entries: &[(&str, f64, f64)]) -> Value {
    json!({ "data": { "baseline": prediction_entries(entries) } })
}

pub fn in_play_payload(entries: &[(&str, f64, f64)]) -> Value {
    json!({ "data": { "data": prediction_entries(entries) } })
}

fn prediction_entries(entries: &[(&str, f64, f64)]) -> Vec<Value> {
    entries
        .iter()
        .map(|(player_name, win, top_10)| {
            json!({
                "player_name": player_name,
                "win": win,
                "top_10": top_10,
            })
        })
        .collect()
}

/// Payload with `count` generated rows, win probability descending.
pub fn generated_baseline(count: usize) -> Value {
    json!({ "data": { "baseline": generated_entries(count, "Pre") } })
}

/// Payload with `count` generated rows, win probability descending.
pub fn generated_in_play(count: usize) -> Value {
    json!({ "data": { "data": generated_entries(count, "Live") } })
}

fn generated_entries(count: usize, prefix: &str) -> Vec<Value> {
    (0..count)
        .map(|idx| {
            json!({
                "player_name": format!("{prefix} Player{idx}"),
                "win": 0.30 - idx as f64 * 0.005,
                "top_10": 0.60 - idx as f64 * 0.005,
            })
        })
        .collect()
}

pub fn player(name: &str, total: f64, ott: f64, app: f64, arg: f64, putt: f64) -> Player {
    Player {
        player_name: name.to_string(),
        sg_total: total,
        sg_ott: ott,
        sg_app: app,
        sg_arg: arg,
        sg_putt: putt,
    }
}

/// Roster whose sg_total values count down from `start` in steps of `step`.
pub fn descending_roster(count: usize, start: f64, step: f64) -> Vec<Player> {
    (0..count)
        .map(|idx| {
            let total = start - idx as f64 * step;
            player(
                &format!("Player {idx}"),
                total,
                total * 0.4,
                total * 0.3,
                total * 0.1,
                total * 0.2,
            )
        })
        .collect()
}
