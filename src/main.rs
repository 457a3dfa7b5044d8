use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::browser::WebDriverPage;
use crate::config::Config;
use crate::error::Result;
use crate::processor::Processor;

mod browser;
mod config;
mod domain;
mod error;
mod processor;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("matchday={}", config.args.log_level)))
        .init();

    let page = WebDriverPage::connect(
        &config.args.webdriver_url,
        &config.page.user_agent,
        config.args.headless,
    )
    .await?;

    let processor = Processor::new(config);
    let outcome = processor.run(&page).await;

    // End the session before surfacing any pipeline error.
    page.close().await?;
    let records = outcome?;

    info!(records, "scrape finished");
    Ok(())
}
