use crate::config::ScrapeOptions;
use crate::error::{Error, Result};
use crate::search::SearchInput;
use headless_chrome::{Browser, Tab};
use serde::de::DeserializeOwned;
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Scrolls the results feed by its own height; falls back to the window
/// when Maps renders without a feed panel.
const SCROLL_RESULTS_JS: &str = r#"
    (function() {
        var feed = document.querySelector('div[role="feed"]');
        if (feed) {
            feed.scrollBy(0, feed.scrollHeight);
        } else {
            window.scrollBy(0, document.body.scrollHeight);
        }
        return true;
    })()
"#;

/// Collects listing links from the results feed in DOM appearance order.
const LISTING_HREFS_JS: &str = r#"
    (function() {
        var out = [];
        var seen = {};
        var anchors = document.querySelectorAll('a[href*="/maps/place/"]');
        for (var i = 0; i < anchors.length; i++) {
            var href = anchors[i].href;
            if (href && !seen[href]) {
                seen[href] = true;
                out.push(href);
            }
        }
        return JSON.stringify(out);
    })()
"#;

/// Browser session that manages the Chrome/Chromium instance for one run
pub struct MapsSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// The single tab every navigation in the run goes through
    tab: Arc<Tab>,
}

impl MapsSession {
    /// Launch a browser instance per the run's options.
    ///
    /// Failure here is terminal for the run and surfaced as
    /// [`Error::BrowserLaunch`]; it is never retried.
    pub fn launch(options: &ScrapeOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Ignore default arguments to prevent detection by anti-bot services
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // Keep the landmark labels the extractor matches on in English
        launch_opts.args.push(OsStr::new("--lang=en-US"));

        // Long runs outlive the 30s default idle timeout
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((1280, 900));

        if !options.use_system_browser {
            if let Some(path) = &options.chrome_path {
                launch_opts.path = Some(path.clone());
            } else {
                log::warn!("no chrome_path set; falling back to the system browser");
            }
        }

        let browser =
            Browser::new(launch_opts).map_err(|e| Error::BrowserLaunch(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::BrowserLaunch(format!("failed to open tab: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// Navigate to the search URL and let the results feed settle.
    pub fn open_search(&self, input: &SearchInput, settle: Duration) -> Result<()> {
        log::info!("opening {}", input.url);
        self.goto(&input.url)?;
        std::thread::sleep(settle);
        Ok(())
    }

    /// Navigate the tab and wait for the navigation to complete.
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| Error::Navigation(format!("failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| {
                Error::Navigation(format!("navigation to {} did not complete: {}", url, e))
            })?;

        Ok(())
    }

    /// Bounded wait for an element to appear. A miss is a per-listing
    /// [`Error::NavigationTimeout`], not a run failure.
    pub fn wait_for(&self, selector: &str, timeout: Duration) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map(|_| ())
            .map_err(|e| Error::NavigationTimeout(format!("{}: {}", selector, e)))
    }

    /// Best-effort click. Absence of the element is not an error.
    pub fn try_click(&self, selector: &str) -> bool {
        match self.tab.find_element(selector) {
            Ok(element) => element.click().is_ok(),
            Err(_) => false,
        }
    }

    /// Evaluate a page-side script that returns a JSON string and parse it.
    pub fn eval_json<T: DeserializeOwned>(&self, js: &str) -> Result<T> {
        let result = self
            .tab
            .evaluate(js, false)
            .map_err(|e| Error::Evaluation(e.to_string()))?;

        let value = result
            .value
            .ok_or_else(|| Error::Evaluation("no value returned from page script".to_string()))?;

        // The script returns a JSON string, so parse it as a string first
        let json_str: String = serde_json::from_value(value)
            .map_err(|e| Error::Evaluation(format!("expected a JSON string payload: {}", e)))?;

        serde_json::from_str(&json_str)
            .map_err(|e| Error::Evaluation(format!("failed to parse page payload: {}", e)))
    }

    /// Scroll the results feed a few increments, settling after each.
    /// Scroll failures are swallowed; the caller detects a dry round from
    /// the harvested hrefs instead.
    pub fn scroll_results_feed(&self, settle: Duration) {
        for _ in 0..3 {
            if let Err(e) = self.tab.evaluate(SCROLL_RESULTS_JS, false) {
                log::debug!("scroll failed: {}", e);
            }
            std::thread::sleep(settle);
        }
    }

    /// Harvest every listing link currently in the feed, in DOM order.
    pub fn listing_hrefs(&self) -> Result<Vec<String>> {
        self.eval_json(LISTING_HREFS_JS)
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close the run's tab. The browser process itself is torn down when
    /// the session is dropped, on both completion and cancellation.
    pub fn close(&self) {
        let _ = self.tab.close(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrapeOptions;

    // Integration tests (require Chrome to be installed)
    #[test]
    #[ignore] // Ignore by default, run with: cargo test -- --ignored
    fn test_launch_browser() {
        let options = ScrapeOptions::new("about:blank");
        let result = MapsSession::launch(&options);
        assert!(result.is_ok());
    }

    #[test]
    #[ignore]
    fn test_goto_and_eval() {
        let options = ScrapeOptions::new("about:blank");
        let session = MapsSession::launch(&options).expect("Failed to launch browser");

        session.goto("about:blank").expect("navigation failed");

        let echoed: Vec<String> = session
            .eval_json(r#"JSON.stringify(["a", "b"])"#)
            .expect("eval failed");
        assert_eq!(echoed, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    #[ignore]
    fn test_try_click_missing_element() {
        let options = ScrapeOptions::new("about:blank");
        let session = MapsSession::launch(&options).expect("Failed to launch browser");

        session.goto("about:blank").expect("navigation failed");
        assert!(!session.try_click("#does-not-exist"));
    }
}
