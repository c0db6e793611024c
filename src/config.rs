use std::path::PathBuf;
use std::time::Duration;

/// Per-run configuration for a scrape.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Free-text search query or full Google Maps URL.
    pub input: String,

    /// Run the browser without a visible window (default: true)
    pub headless: bool,

    /// Prefer the system-installed Chrome/Chromium over `chrome_path`.
    pub use_system_browser: bool,

    /// Path to a specific Chrome/Chromium binary.
    pub chrome_path: Option<PathBuf>,

    /// Stop collecting once this many listings are found. 0 = unbounded.
    pub max_listings: usize,

    /// Settle time after a scroll or listing navigation.
    pub scroll_delay: Duration,

    /// Bounded wait for a listing's detail panel to render before the
    /// listing is skipped.
    pub render_timeout: Duration,
}

impl ScrapeOptions {
    /// Create options for the given query or Maps URL with defaults
    /// matching the CLI.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            headless: true,
            use_system_browser: true,
            chrome_path: None,
            max_listings: 0,
            scroll_delay: Duration::from_secs(1),
            render_timeout: Duration::from_secs(15),
        }
    }

    /// Builder method: set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Builder method: prefer the system browser over a custom binary
    pub fn use_system_browser(mut self, use_system: bool) -> Self {
        self.use_system_browser = use_system;
        self
    }

    /// Builder method: set an explicit Chrome/Chromium binary
    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Builder method: cap the number of listings (0 = unbounded)
    pub fn max_listings(mut self, max: usize) -> Self {
        self.max_listings = max;
        self
    }

    /// Builder method: set the scroll-settle delay
    pub fn scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }

    /// Builder method: set the per-listing render timeout
    pub fn render_timeout(mut self, timeout: Duration) -> Self {
        self.render_timeout = timeout;
        self
    }
}
