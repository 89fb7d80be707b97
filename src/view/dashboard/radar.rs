use std::f64::consts::FRAC_PI_2;

use maud::{Markup, html};

use crate::model::Player;
use crate::view::dashboard::types::{RadarChart, RadarPoint, RadarSeries, SKILL_CATEGORIES};
use crate::view::dashboard::utils::{points_attr, short_player_name, top_by_sg_total};

const RADAR_PLAYERS: usize = 5;

fn axis_values(player: &Player) -> [f64; 4] {
    [player.sg_ott, player.sg_app, player.sg_arg, player.sg_putt]
}

/// Project the top 5 players onto four radar axes sharing one scale: the
/// largest absolute value any of them posts on any axis. Radii are
/// directional, so a negative component pulls its vertex through the center,
/// clamped at the shared max.
#[must_use]
pub fn project_radar(players: &[Player]) -> RadarChart {
    let top = top_by_sg_total(players, RADAR_PLAYERS);
    if top.is_empty() {
        return RadarChart::default();
    }

    let max_abs = top
        .iter()
        .flat_map(|p| axis_values(p))
        .fold(0.0_f64, |m, v| m.max(v.abs()));
    let scale = if max_abs > 0.0 { max_abs } else { 1.0 };

    let series = top
        .iter()
        .map(|player| {
            let points = axis_values(player)
                .iter()
                .enumerate()
                .map(|(axis_idx, &value)| {
                    let radius = (value / scale).clamp(-1.0, 1.0);
                    // axis 0 points straight up; y grows downward in SVG
                    let theta = -FRAC_PI_2 + axis_idx as f64 * FRAC_PI_2;
                    RadarPoint {
                        x: radius * theta.cos(),
                        y: radius * theta.sin(),
                    }
                })
                .collect();

            RadarSeries {
                player_name: player.player_name.clone(),
                short_name: short_player_name(&player.player_name),
                points,
            }
        })
        .collect();

    RadarChart { scale, series }
}

#[must_use]
pub fn render_radar(chart: &RadarChart) -> Markup {
    const R: f64 = 100.0;
    let axis_ends = [(0.0, -R), (R, 0.0), (0.0, R), (-R, 0.0)];

    html! {
        @if !chart.series.is_empty() {
            svg class="skill-radar" viewBox="-130 -130 260 260" {
                @for (idx, (x, y)) in axis_ends.iter().copied().enumerate() {
                    line class="radar-axis" x1="0" y1="0" x2=(format!("{x:.1}")) y2=(format!("{y:.1}")) {}
                    text class="radar-axis-label" x=(format!("{:.1}", x * 1.18)) y=(format!("{:.1}", y * 1.18)) {
                        (SKILL_CATEGORIES[idx])
                    }
                }
                @for (series_idx, series) in chart.series.iter().enumerate() {
                    @let scaled: Vec<(f64, f64)> = series.points.iter().map(|p| (p.x * R, p.y * R)).collect();
                    polygon class=(format!("radar-series series-{series_idx}")) points=(points_attr(&scaled)) {
                        title { (series.player_name) }
                    }
                }
            }
            div class="chart-legend" {
                @for (series_idx, series) in chart.series.iter().enumerate() {
                    span class=(format!("legend-item series-{series_idx}")) { (series.short_name) }
                }
            }
        }
    }
}
