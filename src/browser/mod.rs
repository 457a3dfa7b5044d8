use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[cfg(test)]
pub(crate) mod fake;
pub(crate) mod webdriver;

pub use webdriver::WebDriverPage;

/// The slice of a browser-automation driver this crate consumes. The scrape
/// logic only ever talks to this seam, so it runs unchanged against a
/// scripted page in tests.
#[async_trait]
pub trait Page: Send + Sync {
    type Handle: Tile;

    async fn goto(&self, url: &str) -> Result<()>;

    /// Wait until at least one element matches `selector`, up to `timeout`.
    /// `Ok(false)` means the deadline passed without a match.
    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<bool>;

    /// Number of elements currently matching `selector`.
    async fn count(&self, selector: &str) -> Result<usize>;

    async fn scroll_by(&self, pixels: i64) -> Result<()>;

    async fn click(&self, selector: &str) -> Result<()>;

    /// Handles for every element matching `selector`, in DOM order.
    async fn tiles(&self, selector: &str) -> Result<Vec<Self::Handle>>;
}

/// One rendered fixture tile. Handles are scoped to the page load they came
/// from and are never persisted.
#[async_trait]
pub trait Tile: Send + Sync {
    /// Trimmable text of the first descendant matching `selector`; errors
    /// when nothing matches.
    async fn text(&self, selector: &str) -> Result<String>;

    /// Texts of every descendant matching `selector`, in DOM order. An
    /// empty result is not an error.
    async fn texts(&self, selector: &str) -> Result<Vec<String>>;
}
