use maud::{Markup, html};

use crate::model::Player;
use crate::view::dashboard::types::{CategoryLine, CategoryPoint, SKILL_CATEGORIES};
use crate::view::dashboard::utils::{format_sg, points_attr, top_by_sg_total};

const CATEGORY_PLAYERS: usize = 10;

/// Average each strokes-gained component over the top-10 subset and place
/// the four averages at evenly spaced category positions, scaled to a
/// symmetric range set by the largest absolute average.
#[must_use]
pub fn project_category_line(players: &[Player]) -> CategoryLine {
    let top = top_by_sg_total(players, CATEGORY_PLAYERS);
    if top.is_empty() {
        return CategoryLine::default();
    }

    let count = top.len() as f64;
    let averages = [
        top.iter().map(|p| p.sg_ott).sum::<f64>() / count,
        top.iter().map(|p| p.sg_app).sum::<f64>() / count,
        top.iter().map(|p| p.sg_arg).sum::<f64>() / count,
        top.iter().map(|p| p.sg_putt).sum::<f64>() / count,
    ];

    let max_abs = averages.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let range = if max_abs > 0.0 { max_abs } else { 1.0 };

    let points = averages
        .iter()
        .enumerate()
        .map(|(idx, &average)| CategoryPoint {
            label: SKILL_CATEGORIES[idx],
            average,
            x: idx as f64 / (SKILL_CATEGORIES.len() - 1) as f64,
            y: (average / range).clamp(-1.0, 1.0),
        })
        .collect();

    CategoryLine { range, points }
}

#[must_use]
pub fn render_category_line(chart: &CategoryLine) -> Markup {
    const W: f64 = 260.0;
    const H: f64 = 200.0;
    const PAD: f64 = 24.0;
    const HALF: f64 = H / 2.0;

    let to_px = |point: &CategoryPoint| {
        (
            PAD + point.x * (W - 2.0 * PAD),
            HALF - point.y * (HALF - PAD),
        )
    };

    html! {
        @if !chart.points.is_empty() {
            svg class="category-line" viewBox=(format!("0 0 {W} {H}")) {
                line class="zero-line" x1="0" y1=(HALF) x2=(W) y2=(HALF) {}
                @let line_points: Vec<(f64, f64)> = chart.points.iter().map(&to_px).collect();
                polyline class="category-path" points=(points_attr(&line_points)) {}
                @for point in &chart.points {
                    @let (px, py) = to_px(point);
                    circle class="category-point" cx=(format!("{px:.1}")) cy=(format!("{py:.1}")) r="3" {
                        title { (point.label) " " (format_sg(point.average)) }
                    }
                    text class="category-label" x=(format!("{px:.1}")) y=(H - 4.0) { (point.label) }
                }
            }
        }
    }
}
