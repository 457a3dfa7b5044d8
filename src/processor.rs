use std::time::Duration;
use tracing::info;

use crate::browser::Page;
use crate::config::Config;
use crate::domain::FixtureRecord;
use crate::error::Result;
use crate::services::extract::{self, OddsLayout};
use crate::services::loader::{self, LoaderParams};
use crate::services::{consent, export};

/// How long to wait for the consent banner before deciding it isn't there.
const COOKIE_WAIT: Duration = Duration::from_secs(5);

pub struct Processor {
    config: Config,
}

impl Processor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the whole pipeline once: navigate, dismiss consent, scroll to
    /// convergence, capture the tiles a single time, extract, export.
    ///
    /// Always writes the output file, even when nothing was gathered; only
    /// driver-level failures bubble up.
    pub async fn run<P: Page>(&self, page: &P) -> Result<usize> {
        let selectors = &self.config.page;

        page.goto(&selectors.url).await?;
        consent::accept_cookies(page, &selectors.cookie_accept, COOKIE_WAIT).await;

        let count = loader::load_until_stable(page, selectors, &self.loader_params()).await?;
        info!(tiles = count, "page settled");

        // Tile handles are captured once, after convergence.
        let tiles = page.tiles(&selectors.tile).await?;
        let records: Vec<FixtureRecord> =
            extract::extract_fixtures(&tiles, selectors, OddsLayout::default()).await;

        export::write_table(&self.config.args.output, &records)?;
        info!(
            records = records.len(),
            path = %self.config.args.output.display(),
            "fixture table saved"
        );

        Ok(records.len())
    }

    fn loader_params(&self) -> LoaderParams {
        LoaderParams {
            max_scrolls: self.config.args.max_scrolls,
            scroll_step: self.config.args.scroll_step,
            settle: Duration::from_millis(self.config.args.settle_ms),
            stable_probes: self.config.args.stable_probes,
            ..LoaderParams::default()
        }
    }
}
