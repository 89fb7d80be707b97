use maud::{Markup, html};

use crate::controller::dashboard::DashboardData;
use crate::view::dashboard::utils::format_sg;
use crate::view::dashboard::{
    project_category_line, project_radar, project_ranking_bars, project_scatter,
    render_category_line, render_predictions, render_radar, render_ranking_bars, render_scatter,
};

fn render_tournament_header(data: &DashboardData) -> Markup {
    html! {
        @if let Some(tournament) = &data.tournament {
            div class="tournament-header" {
                h2 { (tournament.event_name) }
                @if let Some(course) = &tournament.course {
                    span class="course" { (course) }
                }
                @if let Some(start_date) = &tournament.start_date {
                    span class="start-date" { (start_date) }
                }
                span class="phase-badge" {
                    (tournament.label.map_or("THIS WEEK", |label| label.as_str()))
                }
            }
        } @else {
            div class="tournament-header" {
                h2 { "No tournament data" }
            }
        }
    }
}

fn render_strength_card(data: &DashboardData) -> Markup {
    let strength = &data.analysis.strength;

    html! {
        div class="strength-card" {
            h3 { "Field Strength" }
            span class="rating" { (strength.rating_display()) }
            span class=(format!("strength-label {}", strength.label.as_str().to_lowercase())) {
                (strength.label.as_str())
            }
            table class="styled-table" {
                tbody {
                    tr { td { "Elite players (SG ≥ 1.5)" } td { (strength.elite_count) } }
                    tr { td { "Top tier (SG ≥ 1.0)" } td { (strength.top_tier) } }
                    tr { td { "Field avg SG" } td { (format_sg(data.analysis.field_avg_sg)) } }
                    tr { td { "Top-20 avg SG" } td { (format_sg(data.analysis.top20_avg_sg)) } }
                }
            }
        }
    }
}

fn render_charts(data: &DashboardData) -> Markup {
    html! {
        div class="charts" {
            div class="chart-card" {
                h3 { "Skill Profile (Top 5)" }
                (render_radar(&project_radar(&data.roster)))
            }
            div class="chart-card" {
                h3 { "Putting vs Ball-Striking (Top 15)" }
                (render_scatter(&project_scatter(&data.roster)))
            }
            div class="chart-card" {
                h3 { "Total SG Ranking (Top 10)" }
                (render_ranking_bars(&project_ranking_bars(&data.roster)))
            }
            div class="chart-card" {
                h3 { "Skill Averages (Top 10)" }
                (render_category_line(&project_category_line(&data.roster)))
            }
        }
    }
}

/// The full dashboard fragment, assembled from one load cycle's result.
#[must_use]
pub fn render_dashboard_template(data: &DashboardData, last_refresh: &str) -> Markup {
    html! {
        (render_tournament_header(data))
        (render_strength_card(data))
        (render_predictions(&data.predictions))
        (render_charts(data))
        div class="refresh-stamp" { "Last refresh: " (last_refresh) " ago" }
    }
}
