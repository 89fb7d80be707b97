use maud::{Markup, html};

use crate::model::Player;
use crate::view::dashboard::types::{Direction, RankingBar, RankingBars};
use crate::view::dashboard::utils::{format_sg, short_player_name, top_by_sg_total};

const RANKING_PLAYERS: usize = 10;

/// Diverging bars of `sg_total` for the top 10 players, scaled to the
/// largest absolute total among them.
#[must_use]
pub fn project_ranking_bars(players: &[Player]) -> RankingBars {
    let top = top_by_sg_total(players, RANKING_PLAYERS);
    if top.is_empty() {
        return RankingBars::default();
    }

    let max_abs = top.iter().fold(0.0_f64, |m, p| m.max(p.sg_total.abs()));
    let scale = if max_abs > 0.0 { max_abs } else { 1.0 };

    let bars = top
        .iter()
        .map(|player| {
            let fraction = (player.sg_total / scale).clamp(-1.0, 1.0);
            RankingBar {
                short_name: short_player_name(&player.player_name),
                sg_total: player.sg_total,
                fraction,
                direction: if player.sg_total < 0.0 {
                    Direction::Below
                } else {
                    Direction::Above
                },
            }
        })
        .collect();

    RankingBars { max_abs, bars }
}

#[must_use]
pub fn render_ranking_bars(chart: &RankingBars) -> Markup {
    const W: f64 = 260.0;
    const H: f64 = 200.0;
    const HALF: f64 = H / 2.0;

    let bar_slot = if chart.bars.is_empty() {
        W
    } else {
        W / chart.bars.len() as f64
    };
    let bar_width = bar_slot * 0.6;

    html! {
        @if !chart.bars.is_empty() {
            svg class="ranking-bars" viewBox=(format!("0 0 {W} {H}")) {
                line class="zero-line" x1="0" y1=(HALF) x2=(W) y2=(HALF) {}
                @for (idx, bar) in chart.bars.iter().enumerate() {
                    @let bar_height = bar.fraction.abs() * (HALF - 16.0);
                    @let x = idx as f64 * bar_slot + (bar_slot - bar_width) / 2.0;
                    @let y = match bar.direction {
                        Direction::Above => HALF - bar_height,
                        Direction::Below => HALF,
                    };
                    @let bar_class = match bar.direction {
                        Direction::Above => "bar positive",
                        Direction::Below => "bar negative",
                    };
                    rect class=(bar_class)
                        x=(format!("{x:.1}")) y=(format!("{y:.1}"))
                        width=(format!("{bar_width:.1}")) height=(format!("{bar_height:.1}")) {
                        title { (bar.short_name) " " (format_sg(bar.sg_total)) }
                    }
                }
            }
        }
    }
}
