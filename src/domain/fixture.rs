use serde::Serialize;

/// One row of the output table. Every field carries the page's raw display
/// text; odds and dates stay strings because downstream consumers want them
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureRecord {
    pub date: String,
    pub time: String,
    /// `"{home} - {away}"`, both sides non-empty.
    pub matchup: String,
    pub odds_home: String,
    pub odds_draw: String,
    pub odds_away: String,
}
