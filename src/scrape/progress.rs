/// Live progress feed for a scrape run.
///
/// Events are delivered in order from the single scrape thread; a sink only
/// needs interior mutability if it accumulates state.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeEvent {
    /// The search page is open and the results feed is being collected.
    SearchOpened { url: String },

    /// One scroll round finished; `added` is how many new references it found.
    CollectRound { round: u32, found: usize, added: usize },

    /// Reference collection ended with `total` listing URLs.
    CollectDone { total: usize },

    /// A listing was parsed and accepted into the result set.
    ListingScraped { index: usize, name: String },

    /// A listing was skipped (render timeout, script failure, no name).
    ListingSkipped { index: usize, url: String, reason: String },

    /// A listing resolved to an already-seen (name, address) key.
    DuplicateDropped { index: usize, name: String },

    /// The cancellation token was observed at an iteration boundary.
    Cancelled { stage: &'static str },

    /// The run finished; counts cover the whole run.
    Finished { scraped: usize, skipped: usize, duplicates: usize },
}

/// Receiver for the live progress feed.
pub trait EventSink {
    fn on_event(&self, event: &ScrapeEvent);
}

/// Default sink: forwards the feed to the `log` crate.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn on_event(&self, event: &ScrapeEvent) {
        match event {
            ScrapeEvent::SearchOpened { url } => log::info!("searching {}", url),
            ScrapeEvent::CollectRound { round, found, added } => {
                if *added == 0 {
                    log::warn!("no new cards (round {})", round);
                } else {
                    log::info!("collected {} listings (+{})", found, added);
                }
            }
            ScrapeEvent::CollectDone { total } => {
                log::info!("collection finished with {} listings", total)
            }
            ScrapeEvent::ListingScraped { index, name } => {
                log::info!("scraped {}: {}", index, name)
            }
            ScrapeEvent::ListingSkipped { index, url, reason } => {
                log::warn!("skipped {} ({}): {}", index, url, reason)
            }
            ScrapeEvent::DuplicateDropped { index, name } => {
                log::info!("duplicate {}: {}", index, name)
            }
            ScrapeEvent::Cancelled { stage } => {
                log::warn!("stop requested during {}; keeping partial results", stage)
            }
            ScrapeEvent::Finished { scraped, skipped, duplicates } => log::info!(
                "done: {} scraped, {} skipped, {} duplicates",
                scraped,
                skipped,
                duplicates
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Test sink that records every event it sees.
    pub(crate) struct RecordingSink(pub Mutex<Vec<ScrapeEvent>>);

    impl EventSink for RecordingSink {
        fn on_event(&self, event: &ScrapeEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_recording_sink_preserves_order() {
        let sink = RecordingSink(Mutex::new(Vec::new()));
        sink.on_event(&ScrapeEvent::CollectDone { total: 2 });
        sink.on_event(&ScrapeEvent::ListingScraped {
            index: 1,
            name: "A".to_string(),
        });

        let events = sink.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], ScrapeEvent::CollectDone { total: 2 });
    }

    #[test]
    fn test_log_sink_accepts_all_variants() {
        let sink = LogSink;
        sink.on_event(&ScrapeEvent::SearchOpened {
            url: "https://example.com".to_string(),
        });
        sink.on_event(&ScrapeEvent::Cancelled { stage: "collect" });
        sink.on_event(&ScrapeEvent::Finished {
            scraped: 1,
            skipped: 0,
            duplicates: 0,
        });
    }
}
