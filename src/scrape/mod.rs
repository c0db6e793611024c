//! Scrape orchestration
//!
//! Ties the run together: validate input, launch the session, collect
//! listing references, walk them into records, and report progress. One
//! browser drives one scrape at a time; every loop polls the cancellation
//! token at its iteration boundary and exits with partial results intact.

pub mod listing;
pub mod pagination;
pub mod progress;

pub use progress::{EventSink, LogSink, ScrapeEvent};

use crate::browser::MapsSession;
use crate::config::ScrapeOptions;
use crate::error::Result;
use crate::record::Place;
use crate::search::SearchInput;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative stop signal, polled between scroll rounds and between
/// listings, never mid-extraction. Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counters for one run, reported alongside the records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeStats {
    /// Listing references the pagination driver collected.
    pub collected: usize,

    /// Records accepted into the result set.
    pub scraped: usize,

    /// Listings skipped (timeout, script failure, no name).
    pub skipped: usize,

    /// Listings dropped as (name, address) duplicates.
    pub duplicates: usize,
}

/// Everything a finished run hands back.
#[derive(Debug)]
pub struct ScrapeOutcome {
    /// Accepted records in first-seen order.
    pub places: Vec<Place>,

    pub stats: ScrapeStats,

    /// Whether the run ended on the cancellation token rather than
    /// exhaustion or the cap.
    pub cancelled: bool,

    /// Sanitized run title, usable as an output file stem.
    pub file_stem: String,
}

/// A configured scrape run.
pub struct Scraper {
    options: ScrapeOptions,
    cancel: CancelToken,
    sink: Box<dyn EventSink>,
}

impl Scraper {
    /// Create a scraper that reports progress through the `log` crate.
    pub fn new(options: ScrapeOptions) -> Self {
        Self::with_sink(options, Box::new(LogSink))
    }

    /// Create a scraper with a custom progress sink.
    pub fn with_sink(options: ScrapeOptions, sink: Box<dyn EventSink>) -> Self {
        Self {
            options,
            cancel: CancelToken::new(),
            sink,
        }
    }

    /// Token for requesting a cooperative stop from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Run the scrape to completion, cancellation, or a terminal error.
    ///
    /// Partial results survive cancellation; only invalid input, a failed
    /// browser launch, or a failed search navigation abort the run.
    pub fn run(&self) -> Result<ScrapeOutcome> {
        let input = SearchInput::parse(&self.options.input)?;

        let session = MapsSession::launch(&self.options)?;
        session.open_search(&input, self.options.scroll_delay)?;
        self.sink.on_event(&ScrapeEvent::SearchOpened {
            url: input.url.clone(),
        });

        let refs =
            pagination::collect_listing_urls(&session, &self.options, &self.cancel, self.sink.as_ref())?;
        self.sink
            .on_event(&ScrapeEvent::CollectDone { total: refs.len() });

        let mut stats = ScrapeStats {
            collected: refs.len(),
            ..Default::default()
        };
        let places = listing::walk_listings(
            &session,
            &refs,
            &self.options,
            &self.cancel,
            self.sink.as_ref(),
            &mut stats,
        )?;

        session.close();

        self.sink.on_event(&ScrapeEvent::Finished {
            scraped: stats.scraped,
            skipped: stats.skipped,
            duplicates: stats.duplicates,
        });

        Ok(ScrapeOutcome {
            places,
            stats,
            cancelled: self.cancel.is_cancelled(),
            file_stem: input.file_stem(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_shared_across_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());

        clone.cancel();
        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_invalid_input_fails_before_launch() {
        let scraper = Scraper::new(ScrapeOptions::new("  "));
        let err = scraper.run().unwrap_err();
        assert!(err.is_terminal());
    }

    #[test]
    fn test_stats_default_zeroed() {
        let stats = ScrapeStats::default();
        assert_eq!(stats.collected + stats.scraped + stats.skipped + stats.duplicates, 0);
    }
}
