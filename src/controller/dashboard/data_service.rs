use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::controller::feed::{FeedConfig, FeedPayloads, fetch_all_sources};
use crate::controller::predictions::PredictionsView;
use crate::controller::{resolver, strength};
use crate::model::{
    FieldAnalysis, Phase, Player, TournamentInfo, baseline_predictions,
    field_snapshot_from_payload, in_play_predictions, schedule_from_payload,
};

/// The complete result of one load cycle. Immutable once built; the view
/// layer only reads it, and the next cycle's result replaces it wholesale.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DashboardData {
    pub tournament: Option<TournamentInfo>,
    pub phase: Phase,
    pub analysis: FieldAnalysis,
    pub roster: Vec<Player>,
    pub predictions: PredictionsView,
}

impl DashboardData {
    /// Fixed defaults shown when an entire cycle failed, so the page never
    /// renders broken.
    #[must_use]
    pub fn placeholder(today: NaiveDate) -> Self {
        derive_dashboard(&FeedPayloads::default(), today)
    }
}

/// Pure derivation step: payloads (possibly partial) in, dashboard state out.
/// Never fails; every missing input has a defined degraded output.
#[must_use]
pub fn derive_dashboard(payloads: &FeedPayloads, today: NaiveDate) -> DashboardData {
    let schedule = schedule_from_payload(payloads.schedule.as_ref());
    let snapshot = field_snapshot_from_payload(payloads.field.as_ref());

    let phase = resolver::phase(&snapshot);
    let tournament = resolver::resolve_tournament(&schedule, &snapshot, today);
    let analysis = strength::analyze(&snapshot.field);

    let pre = baseline_predictions(payloads.baseline.as_ref());
    let live = in_play_predictions(payloads.in_play.as_ref());
    let predictions = PredictionsView::new(pre, live, phase);

    DashboardData {
        tournament,
        phase,
        analysis,
        roster: snapshot.field,
        predictions,
    }
}

/// Run one full load cycle: fetch every source, then derive.
pub async fn get_data_for_dashboard(config: &FeedConfig) -> DashboardData {
    let payloads = fetch_all_sources(config).await;
    derive_dashboard(&payloads, chrono::Utc::now().date_naive())
}
