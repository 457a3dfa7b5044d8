use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::browser::{Page, Tile};
use crate::error::Result;

/// A live page behind a WebDriver session.
pub struct WebDriverPage {
    client: Client,
}

impl WebDriverPage {
    /// Start a session against a running chromedriver/geckodriver. The page
    /// blocks default automation user agents, so the configured one is
    /// forced via browser arguments.
    pub async fn connect(webdriver_url: &str, user_agent: &str, headless: bool) -> Result<Self> {
        let mut browser_args = vec![format!("--user-agent={user_agent}")];
        if headless {
            browser_args.push("--headless=new".to_string());
        }

        let mut caps = Capabilities::new();
        caps.insert("goog:chromeOptions".to_string(), json!({ "args": browser_args }));

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await?;

        debug!(webdriver_url, headless, "WebDriver session established");
        Ok(Self { client })
    }

    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}

#[async_trait]
impl Page for WebDriverPage {
    type Handle = WebDriverTile;

    async fn goto(&self, url: &str) -> Result<()> {
        self.client.goto(url).await?;
        Ok(())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<bool> {
        match self
            .client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
        {
            Ok(_) => Ok(true),
            Err(CmdError::WaitTimeout) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.client.find_all(Locator::Css(selector)).await?.len())
    }

    async fn scroll_by(&self, pixels: i64) -> Result<()> {
        self.client
            .execute("window.scrollBy(0, arguments[0]);", vec![pixels.into()])
            .await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.client.find(Locator::Css(selector)).await?.click().await?;
        Ok(())
    }

    async fn tiles(&self, selector: &str) -> Result<Vec<WebDriverTile>> {
        let elements = self.client.find_all(Locator::Css(selector)).await?;
        Ok(elements.into_iter().map(WebDriverTile).collect())
    }
}

/// Handle to one rendered tile element.
pub struct WebDriverTile(Element);

#[async_trait]
impl Tile for WebDriverTile {
    async fn text(&self, selector: &str) -> Result<String> {
        Ok(self.0.find(Locator::Css(selector)).await?.text().await?)
    }

    async fn texts(&self, selector: &str) -> Result<Vec<String>> {
        let mut texts = Vec::new();
        for element in self.0.find_all(Locator::Css(selector)).await? {
            texts.push(element.text().await?);
        }
        Ok(texts)
    }
}
