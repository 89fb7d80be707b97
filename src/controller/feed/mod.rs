pub mod client;

pub use client::*;

use reqwest::Client;
use serde_json::Value;

/// Everything one load cycle fetched. Any member may be `None` after an
/// isolated fetch failure; derivation still runs.
#[derive(Clone, Debug, Default)]
pub struct FeedPayloads {
    pub schedule: Option<Value>,
    pub field: Option<Value>,
    pub baseline: Option<Value>,
    pub in_play: Option<Value>,
}

/// Issue all four feed requests concurrently and wait for every one of them,
/// so derivation never sees a half-finished cycle.
pub async fn fetch_all_sources(config: &FeedConfig) -> FeedPayloads {
    let client = Client::new();

    let (schedule, field, baseline, in_play) = futures::join!(
        fetch_schedule(&client, config),
        fetch_field_updates(&client, config),
        fetch_baseline_predictions(&client, config),
        fetch_in_play_predictions(&client, config),
    );

    FeedPayloads {
        schedule,
        field,
        baseline,
        in_play,
    }
}
