use thiserror::Error;

/// Errors that can occur during a scrape run
#[derive(Debug, Error)]
pub enum Error {
    /// Chrome/Chromium could not be started. Terminal for the run.
    #[error("failed to launch browser: {0}")]
    BrowserLaunch(String),

    /// The search query or Maps URL was rejected before launching anything.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Navigation to a page failed outright.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// A listing's detail panel did not render within the bounded wait.
    /// Skip-and-continue at the listing level, never fatal for the run.
    #[error("listing did not render in time: {0}")]
    NavigationTimeout(String),

    /// A page-side script failed or returned an unreadable payload.
    #[error("page script evaluation failed: {0}")]
    Evaluation(String),

    #[error("csv export failed: {0}")]
    CsvExport(#[from] csv::Error),

    #[error("xlsx export failed: {0}")]
    XlsxExport(#[from] rust_xlsxwriter::XlsxError),

    #[error("output io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error aborts the whole run (as opposed to one listing).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Error::BrowserLaunch(_) | Error::InvalidInput(_) | Error::Navigation(_)
        )
    }
}
