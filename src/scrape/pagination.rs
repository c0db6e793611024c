use crate::browser::MapsSession;
use crate::config::ScrapeOptions;
use crate::error::Result;
use crate::scrape::progress::{EventSink, ScrapeEvent};
use crate::scrape::CancelToken;
use std::collections::HashSet;

/// Consecutive dry scroll rounds tolerated before trying the next results
/// page and, failing that, ending collection.
const MAX_DRY_ROUNDS: u32 = 2;

/// Selectors for the "next page" button across Maps layout variants.
const NEXT_PAGE_SELECTORS: &[&str] = &[
    r#"button[aria-label="Next page"]"#,
    r#"button[aria-label=" Next page "]"#,
    r#"button[data-id="pagination-button-next"]"#,
];

/// Pure collection bookkeeping, separated from browser I/O so the end
/// conditions are testable without a browser.
///
/// References are kept in first-seen DOM order. The seen-set exists only to
/// detect dry rounds and enforce the cap; record identity dedup happens
/// downstream in the listing walker.
#[derive(Debug)]
pub struct CollectState {
    ordered: Vec<String>,
    seen: HashSet<String>,
    dry_rounds: u32,
    max_listings: usize,
}

impl CollectState {
    pub fn new(max_listings: usize) -> Self {
        Self {
            ordered: Vec::new(),
            seen: HashSet::new(),
            dry_rounds: 0,
            max_listings,
        }
    }

    /// Absorb one round of harvested hrefs, in order, stopping at the cap.
    /// Returns how many were new this round and updates the dry counter.
    pub fn absorb(&mut self, hrefs: impl IntoIterator<Item = String>) -> usize {
        let mut added = 0;
        for href in hrefs {
            if self.cap_reached() {
                break;
            }
            if self.seen.insert(href.clone()) {
                self.ordered.push(href);
                added += 1;
            }
        }

        if added == 0 {
            self.dry_rounds += 1;
        } else {
            self.dry_rounds = 0;
        }
        added
    }

    pub fn cap_reached(&self) -> bool {
        self.max_listings > 0 && self.ordered.len() >= self.max_listings
    }

    /// Two consecutive dry rounds mean the feed stopped loading new cards.
    pub fn exhausted(&self) -> bool {
        self.dry_rounds >= MAX_DRY_ROUNDS
    }

    /// Forget the dry streak after a successful page turn.
    pub fn reset_dry(&mut self) {
        self.dry_rounds = 0;
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn into_refs(self) -> Vec<String> {
        self.ordered
    }
}

/// Scroll the results feed until it runs dry, the cap is reached, or the
/// run is cancelled. Returns listing URLs in first-seen DOM order.
pub fn collect_listing_urls(
    session: &MapsSession,
    options: &ScrapeOptions,
    cancel: &CancelToken,
    events: &dyn EventSink,
) -> Result<Vec<String>> {
    let mut state = CollectState::new(options.max_listings);
    let mut round: u32 = 0;

    loop {
        if cancel.is_cancelled() {
            events.on_event(&ScrapeEvent::Cancelled { stage: "collect" });
            break;
        }

        round += 1;
        session.scroll_results_feed(options.scroll_delay);
        let added = state.absorb(session.listing_hrefs()?);
        events.on_event(&ScrapeEvent::CollectRound {
            round,
            found: state.len(),
            added,
        });

        if state.cap_reached() {
            break;
        }

        if state.exhausted() {
            if turn_page(session, options) {
                state.reset_dry();
                continue;
            }
            break;
        }
    }

    Ok(state.into_refs())
}

/// Try the "next page" button variants once. Maps only shows the button in
/// some layouts; absence just means the feed is scroll-only.
fn turn_page(session: &MapsSession, options: &ScrapeOptions) -> bool {
    for selector in NEXT_PAGE_SELECTORS {
        if session.try_click(selector) {
            log::info!("clicked next page");
            std::thread::sleep(options.scroll_delay);
            return true;
        }
    }
    false
}
