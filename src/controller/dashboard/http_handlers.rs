use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use std::collections::HashMap;

use super::data_service::get_data_for_dashboard;
use crate::cache::{self, CACHE_DURATION, CycleCache};
use crate::controller::feed::FeedConfig;
use crate::controller::predictions::PredictionSource;
use crate::view::dashboard::{render_dashboard_template, render_predictions};

// Helper to get a query parameter with a default value
fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map(|s| s.as_str()).unwrap_or("")
}

/// Full dashboard fragment. Serves the cached cycle while it is fresh,
/// otherwise runs a new load cycle and stores its result. `json=1` returns
/// the derived state instead of markup; `cache=0` forces a new cycle.
pub async fn dashboard(
    query: web::Query<HashMap<String, String>>,
    config: Data<FeedConfig>,
    cache: Data<CycleCache>,
) -> impl Responder {
    let use_cache = match get_param_str(&query, "cache") {
        "0" => false,
        _ => true, // Default to true
    };
    let json = matches!(get_param_str(&query, "json"), "1");

    let cycle = if use_cache {
        cache::fresh_cycle(&cache, CACHE_DURATION).await
    } else {
        None
    };

    let cycle = match cycle {
        Some(cycle) => cycle,
        None => {
            let data = get_data_for_dashboard(&config).await;
            cache::store_cycle(&cache, data).await
        }
    };

    if json {
        return HttpResponse::Ok().json(&cycle.data);
    }

    let markup = render_dashboard_template(&cycle.data, &cache::age_display(&cycle.cached_time));
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// Predictions fragment for the source toggle. Reads only the latest cached
/// cycle; flipping the source never triggers a refetch.
pub async fn dashboard_predictions(
    query: web::Query<HashMap<String, String>>,
    cache: Data<CycleCache>,
) -> impl Responder {
    let requested = match get_param_str(&query, "source") {
        "pre" => PredictionSource::Pre,
        _ => PredictionSource::Live, // Default to live
    };

    let markup = match cache::latest_cycle(&cache).await {
        Some(cycle) => {
            let mut view = cycle.data.predictions.clone();
            view.set_source(requested);
            render_predictions(&view)
        }
        None => {
            let today = chrono::Utc::now().date_naive();
            render_predictions(&super::DashboardData::placeholder(today).predictions)
        }
    };

    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
