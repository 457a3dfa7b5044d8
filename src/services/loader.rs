use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::browser::Page;
use crate::config::PageConfig;
use crate::error::Result;

/// Tuning knobs for the convergence loop.
#[derive(Debug, Clone)]
pub struct LoaderParams {
    /// Upper bound on scroll iterations; guarantees termination even on a
    /// feed that keeps regenerating.
    pub max_scrolls: u32,
    /// Scroll distance per iteration, in pixels.
    pub scroll_step: i64,
    /// Interval between tile-count probes while rendering settles.
    pub settle: Duration,
    /// Consecutive unchanged counts required before declaring convergence.
    /// 1 stops at the very first repeat, which under-collects when the
    /// page stalls for an iteration.
    pub stable_probes: u32,
    /// How long to wait for the fixture-list container to render at all.
    pub container_wait: Duration,
}

impl Default for LoaderParams {
    fn default() -> Self {
        Self {
            max_scrolls: 100,
            scroll_step: 200,
            settle: Duration::from_millis(500),
            stable_probes: 2,
            container_wait: Duration::from_secs(30),
        }
    }
}

/// Settle probes spent per scroll before moving on. Keeps a page that
/// mutates continuously from stalling a single iteration.
const MAX_SETTLE_PROBES: u32 = 4;

/// Scroll until the tile count stops changing, then report it.
///
/// A page whose fixture list never renders yields `Ok(0)`: the run degrades
/// to an empty table instead of failing.
pub async fn load_until_stable<P: Page>(
    page: &P,
    selectors: &PageConfig,
    params: &LoaderParams,
) -> Result<usize> {
    if !page
        .wait_for(&selectors.fixture_list, params.container_wait)
        .await?
    {
        warn!(
            selector = %selectors.fixture_list,
            "fixture list never rendered, returning empty set"
        );
        return Ok(0);
    }

    let mut previous = 0usize;
    let mut streak = 0u32;
    let mut count = 0usize;

    for scroll in 1..=params.max_scrolls {
        page.scroll_by(params.scroll_step).await?;
        count = settle(page, &selectors.tile, params.settle).await?;
        info!(scroll, tiles = count, "scroll iteration");

        if count == previous {
            streak += 1;
            if streak >= params.stable_probes {
                info!(tiles = count, "tile count stable, stopping");
                return Ok(count);
            }
        } else {
            streak = 0;
            previous = count;
        }
    }

    info!(
        tiles = count,
        scrolls = params.max_scrolls,
        "scroll budget exhausted before the count settled"
    );
    Ok(count)
}

/// Poll the tile count until two consecutive probes agree, bounded by
/// `MAX_SETTLE_PROBES`.
async fn settle<P: Page>(page: &P, selector: &str, interval: Duration) -> Result<usize> {
    let mut last = page.count(selector).await?;
    for _ in 0..MAX_SETTLE_PROBES {
        sleep(interval).await;
        let now = page.count(selector).await?;
        if now == last {
            break;
        }
        last = now;
    }
    Ok(last)
}
