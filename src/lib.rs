pub mod args;
pub mod cache;
pub mod model;
pub mod controller {
    pub mod dashboard;
    pub mod feed;
    pub mod predictions;
    pub mod resolver;
    pub mod strength;
}
pub mod view {
    pub mod dashboard;
    pub mod index;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use controller::dashboard::{DashboardData, derive_dashboard};
pub use controller::predictions::PredictionsView;
