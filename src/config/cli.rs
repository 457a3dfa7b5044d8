use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Output file for the fixture table
    #[arg(default_value = "data/sts_premier_league.csv")]
    pub output: PathBuf,

    /// JSON file overriding the built-in page config (URL + selectors)
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// WebDriver endpoint to attach to
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:4444")]
    pub webdriver_url: String,

    /// Run the browser without a visible window
    #[arg(long)]
    pub headless: bool,

    /// Upper bound on scroll iterations before giving up on convergence
    #[arg(long, default_value_t = 100)]
    pub max_scrolls: u32,

    /// Scroll distance per iteration, in pixels
    #[arg(long, default_value_t = 200)]
    pub scroll_step: i64,

    /// Interval between tile-count probes while waiting for rendering to settle
    #[arg(long, default_value_t = 500)]
    pub settle_ms: u64,

    /// Consecutive unchanged counts required to declare convergence
    #[arg(long, default_value_t = 2)]
    pub stable_probes: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
