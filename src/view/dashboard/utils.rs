use std::cmp::Ordering;

use crate::model::Player;

pub fn short_player_name(player_name: &str) -> String {
    let parts: Vec<&str> = player_name.split_whitespace().collect();

    if parts.len() >= 2 {
        let first_initial = parts[0].chars().next().unwrap_or(' ');
        let last_name = parts[parts.len() - 1];
        format!("{first_initial}. {last_name}")
    } else {
        player_name.to_string()
    }
}

/// The `n` players with the highest `sg_total`, ties kept in source order.
#[must_use]
pub fn top_by_sg_total(players: &[Player], n: usize) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| {
        b.sg_total
            .partial_cmp(&a.sg_total)
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

#[must_use]
pub fn format_pct(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

#[must_use]
pub fn format_sg(value: f64) -> String {
    format!("{value:+.2}")
}

/// Build an SVG `points` attribute from already-projected coordinates.
#[must_use]
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}
