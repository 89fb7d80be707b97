use clap::Parser;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the web server binds to
    #[arg(short = 'b', long, value_name = "BIND_ADDR", default_value = "0.0.0.0:8081")]
    pub bind: String,
    /// Base url of the golf data feed
    #[arg(
        long,
        value_name = "FEED_BASE_URL",
        default_value = "https://feeds.datagolf.com"
    )]
    pub feed_base_url: String,
    /// Feed api key, appended to every feed request
    #[arg(short = 'k', long, value_name = "FEED_API_KEY", default_value = "")]
    pub feed_api_key: String,
    /// Tour requested from the feed
    #[arg(long, value_name = "TOUR", default_value = "pga")]
    pub tour: String,
    /// Seconds between automatic dashboard refreshes
    #[arg(long, value_name = "REFRESH_SECS", default_value = "300")]
    pub refresh_secs: u64,
    /// Page title shown on the index page
    #[arg(long, value_name = "TITLE", default_value = "Field Pulse")]
    pub title: String,
}
