use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::browser::Page;

/// Pause after a successful click so the overlay can clear before the
/// scroll loop starts.
const CLEAR_DELAY: Duration = Duration::from_secs(1);

/// Dismiss the cookie-consent banner if the page shows one. Strictly a
/// precondition: every failure path is logged and swallowed, the scrape
/// proceeds either way.
pub async fn accept_cookies<P: Page>(page: &P, selector: &str, timeout: Duration) {
    match page.wait_for(selector, timeout).await {
        Ok(true) => match page.click(selector).await {
            Ok(()) => {
                info!("cookie banner accepted");
                sleep(CLEAR_DELAY).await;
            }
            Err(e) => info!(error = %e, "cookie banner present but could not be clicked"),
        },
        Ok(false) => info!("no cookie banner shown"),
        Err(e) => info!(error = %e, "cookie banner check failed, continuing"),
    }
}
