use maud::{Markup, html};

use crate::controller::predictions::{PredictionSource, PredictionsView};
use crate::view::dashboard::utils::format_pct;

/// The ranked predictions table plus, mid-tournament, the source toggle.
/// Served whole as an HTMX fragment so the toggle swaps it in place.
#[must_use]
pub fn render_predictions(view: &PredictionsView) -> Markup {
    let other_source = match view.source() {
        PredictionSource::Live => PredictionSource::Pre,
        PredictionSource::Pre => PredictionSource::Live,
    };

    html! {
        div id="predictions" {
            h3 { "Predictions" }
            @if view.toggle_available() {
                button class="source-toggle"
                    hx-get=(format!("dashboard/predictions?source={}", other_source.as_str()))
                    hx-target="#predictions" hx-swap="outerHTML" {
                    (view.toggle_label())
                }
            }
            @if view.rows().is_empty() {
                table class="styled-table" {
                    tbody {
                        tr {
                            td colspan="4" { "No data available" }
                        }
                    }
                }
            } @else {
                table class="styled-table" {
                    thead {
                        tr {
                            th { "RANK" }
                            th { "PLAYER" }
                            th { "WIN" }
                            th { "TOP 10" }
                        }
                    }
                    tbody {
                        @for (idx, entry) in view.rows().iter().enumerate() {
                            tr {
                                td { (idx + 1) }
                                td { (entry.player_name) }
                                td { (format_pct(entry.win)) }
                                td { (format_pct(entry.top_10)) }
                            }
                        }
                    }
                }
            }
        }
    }
}
