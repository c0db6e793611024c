//! # maps-scraper
//!
//! A Google Maps listing scraper built on the Chrome DevTools Protocol (CDP).
//! It runs a Maps search, scrolls the results feed, opens each listing, and
//! parses the visible detail panel into structured records, exportable to
//! CSV and XLSX.
//!
//! ## Features
//!
//! - **Session Management**: one Chrome/Chromium instance per run, headless
//!   or headed, torn down on completion and cancellation alike
//! - **Scroll Pagination**: incremental feed scrolling with dry-round
//!   detection and an optional listing cap
//! - **Field Extraction**: name, address components, phone, website, rating,
//!   review count, categories, weekly hours, coordinates, and social links
//! - **Deduplication**: run-scoped (name, address) identity keys
//! - **Export**: fixed-column CSV and styled XLSX with identical cell values
//!
//! ## Usage
//!
//! ```rust,no_run
//! use maps_scraper::{ScrapeOptions, Scraper};
//!
//! # fn main() -> maps_scraper::Result<()> {
//! let options = ScrapeOptions::new("restaurants in London").max_listings(5);
//! let scraper = Scraper::new(options);
//!
//! // The token lets another thread stop the run between listings.
//! let cancel = scraper.cancel_token();
//! # let _ = cancel;
//!
//! let outcome = scraper.run()?;
//! let csv_bytes = maps_scraper::export::to_csv(&outcome.places)?;
//! # let _ = csv_bytes;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: browser session lifecycle and page-side helpers
//! - [`scrape`]: orchestration, pagination, listing walking, progress feed
//! - [`extract`]: landmark harvesting and field parsing
//! - [`export`]: CSV and XLSX writers
//! - [`search`]: query/URL classification and output naming
//! - [`error`]: error types and result alias

pub mod browser;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod record;
pub mod scrape;
pub mod search;

pub use browser::MapsSession;
pub use config::ScrapeOptions;
pub use error::{Error, Result};
pub use record::{Address, DayHours, Place, SocialLinks, Weekday, WeeklyHours};
pub use scrape::{CancelToken, EventSink, LogSink, ScrapeEvent, ScrapeOutcome, ScrapeStats, Scraper};
pub use search::SearchInput;
