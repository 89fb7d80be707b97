use reqwest::Client;
use serde_json::Value;

use crate::args::Args;

/// Connection details for the upstream feed.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    pub base_url: String,
    pub api_key: String,
    pub tour: String,
}

impl FeedConfig {
    #[must_use]
    pub fn from_args(args: &Args) -> Self {
        FeedConfig {
            base_url: args.feed_base_url.clone(),
            api_key: args.feed_api_key.clone(),
            tour: args.tour.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}?tour={}&key={}",
            self.base_url, path, self.tour, self.api_key
        )
    }
}

/// A fetch that fails for any reason (transport or parse) degrades to `None`;
/// the normalizers treat that as "no data".
async fn get_json(client: &Client, url: &str) -> Option<Value> {
    match client.get(url).send().await {
        Ok(resp) => match resp.json::<Value>().await {
            Ok(json) => Some(json),
            Err(e) => {
                eprintln!("feed: unparseable response from {url}: {e}");
                None
            }
        },
        Err(e) => {
            eprintln!("feed: request to {url} failed: {e}");
            None
        }
    }
}

pub async fn fetch_schedule(client: &Client, config: &FeedConfig) -> Option<Value> {
    get_json(client, &config.url("get-schedule")).await
}

pub async fn fetch_field_updates(client: &Client, config: &FeedConfig) -> Option<Value> {
    get_json(client, &config.url("field-updates")).await
}

pub async fn fetch_baseline_predictions(client: &Client, config: &FeedConfig) -> Option<Value> {
    get_json(client, &config.url("preds/pre-tournament")).await
}

pub async fn fetch_in_play_predictions(client: &Client, config: &FeedConfig) -> Option<Value> {
    get_json(client, &config.url("preds/in-play")).await
}
