use tracing::{debug, warn};

use crate::browser::Tile;
use crate::config::PageConfig;
use crate::domain::FixtureRecord;
use crate::error::{Result, ScrapeError};

/// Positional mapping from a tile's odds values (DOM order) to the 1/X/2
/// outcomes. The page currently renders home, draw, away first; if that
/// ever changes this policy changes with it and nothing else does.
#[derive(Debug, Clone, Copy)]
pub struct OddsLayout {
    pub home: usize,
    pub draw: usize,
    pub away: usize,
}

impl Default for OddsLayout {
    fn default() -> Self {
        Self {
            home: 0,
            draw: 1,
            away: 2,
        }
    }
}

impl OddsLayout {
    /// Minimum number of odds values a tile must expose to be usable.
    fn required(&self) -> usize {
        self.home.max(self.draw).max(self.away) + 1
    }
}

/// Map every tile to a record, skipping the ones that can't be read. One
/// malformed tile never aborts the batch.
pub async fn extract_fixtures<T: Tile>(
    tiles: &[T],
    selectors: &PageConfig,
    layout: OddsLayout,
) -> Vec<FixtureRecord> {
    let mut records = Vec::with_capacity(tiles.len());

    for (index, tile) in tiles.iter().enumerate() {
        match read_tile(tile, selectors, layout).await {
            Ok(Some(record)) => records.push(record),
            Ok(None) => debug!(tile = index, "fewer odds than the layout needs, dropped"),
            Err(e) => warn!(tile = index, error = %e, "failed to read fixture tile"),
        }
    }

    records
}

/// `Ok(None)` is the shape filter: the tile is fine, it just doesn't carry
/// a full 1/X/2 market.
async fn read_tile<T: Tile>(
    tile: &T,
    selectors: &PageConfig,
    layout: OddsLayout,
) -> Result<Option<FixtureRecord>> {
    let home = team_name(tile, &selectors.team_home, "home").await?;
    let away = team_name(tile, &selectors.team_away, "away").await?;
    let date = tile.text(&selectors.start_date).await?.trim().to_string();
    let time = tile.text(&selectors.start_time).await?.trim().to_string();

    let odds: Vec<String> = tile
        .texts(&selectors.odds_value)
        .await?
        .iter()
        .map(|value| value.trim().to_string())
        .collect();

    if odds.len() < layout.required() {
        return Ok(None);
    }

    Ok(Some(FixtureRecord {
        date,
        time,
        matchup: format!("{home} - {away}"),
        odds_home: odds[layout.home].clone(),
        odds_draw: odds[layout.draw].clone(),
        odds_away: odds[layout.away].clone(),
    }))
}

async fn team_name<T: Tile>(tile: &T, selector: &str, side: &str) -> Result<String> {
    let name = tile.text(selector).await?.trim().to_string();
    if name.is_empty() {
        return Err(ScrapeError::Parse(format!("empty {side} team name")));
    }
    Ok(name)
}
