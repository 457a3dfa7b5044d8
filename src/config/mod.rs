use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use serde::Deserialize;

pub(crate) mod cli;

/// Where to find everything on the target page. The defaults match the
/// sts.pl Premier League listing; a structure change on their side is a
/// config-file update, not a code change.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub url: String,
    pub user_agent: String,
    /// Container that must render before scrolling starts.
    pub fixture_list: String,
    /// One fixture tile.
    pub tile: String,
    pub team_home: String,
    pub team_away: String,
    pub start_date: String,
    pub start_time: String,
    /// Every odds value inside a tile, in DOM order.
    pub odds_value: String,
    pub cookie_accept: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: "https://www.sts.pl/zaklady-bukmacherskie/pilka-nozna/anglia/premier-league/1/1/17"
                .to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
                .to_string(),
            fixture_list: "bo-prematch-match-tiles-list".to_string(),
            tile: "a.one-ticket-match-tile-link".to_string(),
            team_home: ".one-ticket-match-tile-event-details-desktop__team-home span".to_string(),
            team_away: ".one-ticket-match-tile-event-details-desktop__team-away span".to_string(),
            start_date: ".match-tile-start-time__date".to_string(),
            start_time: ".match-tile-start-time__time".to_string(),
            odds_value: ".odds-button__odd-value".to_string(),
            cookie_accept: "#CybotCookiebotDialogBodyLevelButtonLevelOptinAllowAll".to_string(),
        }
    }
}

pub struct Config {
    pub args: Args,
    pub page: PageConfig,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();

        let page = match &args.config_file {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => PageConfig::default(),
        };

        Ok(Self { args, page })
    }
}
