use std::cmp::Ordering;

use maud::{Markup, html};

use crate::model::Player;
use crate::view::dashboard::types::{ScatterChart, ScatterPoint};
use crate::view::dashboard::utils::{format_sg, short_player_name, top_by_sg_total};

const SCATTER_PLAYERS: usize = 15;

/// Hover radius in CSS pixels; hit-testing scales it by the device pixel
/// ratio so the perceived radius stays the same on high-density screens.
pub const HOVER_RADIUS_PX: f64 = 12.0;

/// Putting (x) against the off-tee + approach + around-green sum (y) for the
/// top 15 players. Both half-ranges are floored at 1.0 so the zero lines keep
/// meaning even on a tightly-bunched field.
#[must_use]
pub fn project_scatter(players: &[Player]) -> ScatterChart {
    let top = top_by_sg_total(players, SCATTER_PLAYERS);
    if top.is_empty() {
        return ScatterChart::default();
    }

    let points: Vec<ScatterPoint> = top
        .iter()
        .map(|player| ScatterPoint {
            player_name: player.player_name.clone(),
            short_name: short_player_name(&player.player_name),
            x: player.sg_putt,
            y: player.sg_ott + player.sg_app + player.sg_arg,
        })
        .collect();

    let x_range = points
        .iter()
        .fold(1.0_f64, |m, p| m.max(p.x.abs()));
    let y_range = points
        .iter()
        .fold(1.0_f64, |m, p| m.max(p.y.abs()));

    ScatterChart {
        points,
        x_range,
        y_range,
    }
}

impl ScatterChart {
    /// CSS-pixel position of point `idx` inside a `width` x `height`
    /// viewport, origin top-left, zero lines through the middle.
    #[must_use]
    pub fn point_px(&self, idx: usize, width: f64, height: f64) -> Option<(f64, f64)> {
        let point = self.points.get(idx)?;
        let x = width / 2.0 + (point.x / self.x_range) * (width / 2.0);
        let y = height / 2.0 - (point.y / self.y_range) * (height / 2.0);
        Some((x, y))
    }

    /// Nearest point within the hover radius of the cursor, or `None`.
    /// Distances are compared in device pixels so a non-1:1 pixel ratio does
    /// not shift the hit area.
    #[must_use]
    pub fn hit_test(
        &self,
        cursor_x: f64,
        cursor_y: f64,
        width: f64,
        height: f64,
        pixel_ratio: f64,
    ) -> Option<usize> {
        let radius = HOVER_RADIUS_PX * pixel_ratio;

        (0..self.points.len())
            .filter_map(|idx| {
                let (px, py) = self.point_px(idx, width, height)?;
                let dx = (px - cursor_x) * pixel_ratio;
                let dy = (py - cursor_y) * pixel_ratio;
                let dist_sq = dx * dx + dy * dy;
                (dist_sq <= radius * radius).then_some((idx, dist_sq))
            })
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .map(|(idx, _)| idx)
    }
}

#[must_use]
pub fn render_scatter(chart: &ScatterChart) -> Markup {
    const W: f64 = 260.0;
    const H: f64 = 200.0;

    html! {
        @if !chart.points.is_empty() {
            svg class="skill-scatter" viewBox=(format!("0 0 {W} {H}")) {
                line class="zero-line" x1="0" y1=(H / 2.0) x2=(W) y2=(H / 2.0) {}
                line class="zero-line" x1=(W / 2.0) y1="0" x2=(W / 2.0) y2=(H) {}
                @for (idx, point) in chart.points.iter().enumerate() {
                    @if let Some((px, py)) = chart.point_px(idx, W, H) {
                        circle class="scatter-point" cx=(format!("{px:.1}")) cy=(format!("{py:.1}")) r="4" {
                            title {
                                (point.player_name) ": putt " (format_sg(point.x))
                                ", ball-striking " (format_sg(point.y))
                            }
                        }
                    }
                }
            }
            div class="axis-caption" { "x: SG putting / y: SG off-tee + approach + around-green" }
        }
    }
}
