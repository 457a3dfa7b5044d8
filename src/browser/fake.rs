use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::browser::{Page, Tile};
use crate::config::PageConfig;
use crate::error::{Result, ScrapeError};

/// Scripted page for tests. Each scroll action reveals the next `growth`
/// entry's worth of tiles (zero once the script runs out); counting and
/// extraction read whatever is revealed at that moment.
pub struct FakePage {
    present: Vec<String>,
    all_tiles: Vec<FakeTile>,
    revealed: Mutex<usize>,
    growth: Mutex<Vec<usize>>,
    counts: Mutex<Vec<usize>>,
    scrolls: Mutex<u32>,
    clicked: Mutex<Vec<String>>,
    visited: Mutex<Vec<String>>,
}

impl FakePage {
    pub fn new(tiles: Vec<FakeTile>, growth: Vec<usize>) -> Self {
        Self {
            present: Vec::new(),
            all_tiles: tiles,
            revealed: Mutex::new(0),
            growth: Mutex::new(growth),
            counts: Mutex::new(Vec::new()),
            scrolls: Mutex::new(0),
            clicked: Mutex::new(Vec::new()),
            visited: Mutex::new(Vec::new()),
        }
    }

    /// Page with `total` featureless tiles, for count-only tests.
    pub fn counting(total: usize, growth: Vec<usize>) -> Self {
        Self::new(vec![FakeTile::default(); total], growth)
    }

    /// Declare a selector as present, so `wait_for` and `click` find it.
    pub fn with_present(mut self, selector: &str) -> Self {
        self.present.push(selector.to_string());
        self
    }

    /// Script the next `count` results directly, one per call, simulating a
    /// page that mutates between probes. Once the script runs out, `count`
    /// falls back to the revealed-tile tally.
    pub fn with_counts(self, counts: Vec<usize>) -> Self {
        *self.counts.lock().unwrap() = counts;
        self
    }

    pub fn scroll_count(&self) -> u32 {
        *self.scrolls.lock().unwrap()
    }

    pub fn clicked(&self) -> Vec<String> {
        self.clicked.lock().unwrap().clone()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

#[async_trait]
impl Page for FakePage {
    type Handle = FakeTile;

    async fn goto(&self, url: &str) -> Result<()> {
        self.visited.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn wait_for(&self, selector: &str, _timeout: Duration) -> Result<bool> {
        Ok(self.present.iter().any(|s| s == selector))
    }

    async fn count(&self, _selector: &str) -> Result<usize> {
        let mut counts = self.counts.lock().unwrap();
        if !counts.is_empty() {
            return Ok(counts.remove(0));
        }
        Ok((*self.revealed.lock().unwrap()).min(self.all_tiles.len()))
    }

    async fn scroll_by(&self, _pixels: i64) -> Result<()> {
        *self.scrolls.lock().unwrap() += 1;
        let mut growth = self.growth.lock().unwrap();
        let step = if growth.is_empty() { 0 } else { growth.remove(0) };
        *self.revealed.lock().unwrap() += step;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        if !self.present.iter().any(|s| s == selector) {
            return Err(ScrapeError::Parse(format!("no element matches {selector}")));
        }
        self.clicked.lock().unwrap().push(selector.to_string());
        Ok(())
    }

    async fn tiles(&self, _selector: &str) -> Result<Vec<FakeTile>> {
        let revealed = (*self.revealed.lock().unwrap()).min(self.all_tiles.len());
        Ok(self.all_tiles[..revealed].to_vec())
    }
}

/// Tile whose selectors resolve to canned texts.
#[derive(Clone, Default)]
pub struct FakeTile {
    fields: HashMap<String, Vec<String>>,
}

impl FakeTile {
    pub fn with(mut self, selector: &str, texts: &[&str]) -> Self {
        self.fields.insert(
            selector.to_string(),
            texts.iter().map(|t| t.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl Tile for FakeTile {
    async fn text(&self, selector: &str) -> Result<String> {
        self.fields
            .get(selector)
            .and_then(|texts| texts.first())
            .cloned()
            .ok_or_else(|| ScrapeError::Parse(format!("no element matches {selector}")))
    }

    async fn texts(&self, selector: &str) -> Result<Vec<String>> {
        Ok(self.fields.get(selector).cloned().unwrap_or_default())
    }
}

/// A well-formed fixture tile, addressed through the same selectors the
/// extractor will use.
pub fn fixture_tile(
    page: &PageConfig,
    home: &str,
    away: &str,
    date: &str,
    time: &str,
    odds: &[&str],
) -> FakeTile {
    FakeTile::default()
        .with(&page.team_home, &[home])
        .with(&page.team_away, &[away])
        .with(&page.start_date, &[date])
        .with(&page.start_time, &[time])
        .with(&page.odds_value, odds)
}
