use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TournamentLabel {
    Upcoming,
    Live,
}

impl TournamentLabel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentLabel::Upcoming => "UPCOMING",
            TournamentLabel::Live => "LIVE",
        }
    }
}

/// The event the dashboard is showing, rebuilt on every load cycle. A `None`
/// label is rendered as a neutral "This Week" badge by the view.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TournamentInfo {
    pub event_name: String,
    pub course: Option<String>,
    pub start_date: Option<String>,
    pub label: Option<TournamentLabel>,
}
