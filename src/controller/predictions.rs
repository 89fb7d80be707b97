use serde::{Deserialize, Serialize};

use crate::model::{Phase, PredictionEntry};

/// How many prediction rows the dashboard shows.
pub const VISIBLE_ROWS: usize = 25;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PredictionSource {
    Pre,
    Live,
}

impl PredictionSource {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionSource::Pre => "pre",
            PredictionSource::Live => "live",
        }
    }
}

/// The ranked predictions view with its togglable data source.
///
/// The phase picks the initial source: pre-tournament predictions before the
/// event, live predictions during it, and after it whichever of the two is
/// still populated (live preferred). Toggling flips only this locally-held
/// state; it never refetches.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PredictionsView {
    pre: Vec<PredictionEntry>,
    live: Vec<PredictionEntry>,
    phase: Phase,
    source: PredictionSource,
}

impl PredictionsView {
    #[must_use]
    pub fn new(pre: Vec<PredictionEntry>, live: Vec<PredictionEntry>, phase: Phase) -> Self {
        let source = match phase {
            Phase::Pre => PredictionSource::Pre,
            Phase::Live => PredictionSource::Live,
            Phase::Post => {
                if live.is_empty() {
                    PredictionSource::Pre
                } else {
                    PredictionSource::Live
                }
            }
        };

        PredictionsView {
            pre,
            live,
            phase,
            source,
        }
    }

    #[must_use]
    pub fn source(&self) -> PredictionSource {
        self.source
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The first 25 entries of the active source, in source order.
    #[must_use]
    pub fn rows(&self) -> &[PredictionEntry] {
        let all = match self.source {
            PredictionSource::Pre => &self.pre,
            PredictionSource::Live => &self.live,
        };
        &all[..all.len().min(VISIBLE_ROWS)]
    }

    /// The toggle is only offered mid-tournament when both sources have data.
    #[must_use]
    pub fn toggle_available(&self) -> bool {
        self.phase == Phase::Live && !self.pre.is_empty() && !self.live.is_empty()
    }

    /// Flip to the other source. A no-op when the toggle is not offered.
    pub fn toggle(&mut self) {
        if !self.toggle_available() {
            return;
        }
        self.source = match self.source {
            PredictionSource::Pre => PredictionSource::Live,
            PredictionSource::Live => PredictionSource::Pre,
        };
    }

    /// Jump to a specific source. Same availability rule as `toggle`.
    pub fn set_source(&mut self, source: PredictionSource) {
        if self.toggle_available() {
            self.source = source;
        }
    }

    /// The control names the state it switches *to*, not the one showing.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        match self.source {
            PredictionSource::Live => "View Pre-Tournament Predictions",
            PredictionSource::Pre => "View Live Predictions",
        }
    }
}
