use crate::browser::MapsSession;
use crate::config::ScrapeOptions;
use crate::error::Result;
use crate::extract::{self, RawListing};
use crate::record::Place;
use crate::scrape::progress::{EventSink, ScrapeEvent};
use crate::scrape::{CancelToken, ScrapeStats};
use std::collections::HashSet;
use std::time::Duration;

/// Settle time after opening the hours widget before harvesting its table.
const HOURS_WIDGET_SETTLE: Duration = Duration::from_millis(500);

/// Visit every collected listing URL, extract a [`Place`] from each, and
/// dedupe by the (name, address) key.
///
/// Listing-level failures -- render timeouts, script errors, nameless
/// panels -- are skipped and counted, never fatal. Accepted records come
/// back in first-seen order.
pub fn walk_listings(
    session: &MapsSession,
    refs: &[String],
    options: &ScrapeOptions,
    cancel: &CancelToken,
    events: &dyn EventSink,
    stats: &mut ScrapeStats,
) -> Result<Vec<Place>> {
    let mut places = Vec::new();
    let mut seen_keys: HashSet<String> = HashSet::new();
    let http = extract::social::fetch_client();
    let source = options.input.trim();

    for (i, url) in refs.iter().enumerate() {
        let index = i + 1;

        if cancel.is_cancelled() {
            events.on_event(&ScrapeEvent::Cancelled { stage: "scrape" });
            break;
        }

        let raw = match open_and_harvest(session, url, options) {
            Ok(raw) => raw,
            Err(err) => {
                stats.skipped += 1;
                events.on_event(&ScrapeEvent::ListingSkipped {
                    index,
                    url: url.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let Some(mut place) = extract::extract_place(&raw, url, source) else {
            stats.skipped += 1;
            events.on_event(&ScrapeEvent::ListingSkipped {
                index,
                url: url.clone(),
                reason: "no usable name".to_string(),
            });
            continue;
        };

        extract::social::enrich_from_website(
            &mut place.social_links,
            place.website.as_deref(),
            &http,
        );

        if !seen_keys.insert(place.dedup_key()) {
            stats.duplicates += 1;
            events.on_event(&ScrapeEvent::DuplicateDropped {
                index,
                name: place.name.clone(),
            });
            continue;
        }

        stats.scraped += 1;
        events.on_event(&ScrapeEvent::ListingScraped {
            index,
            name: place.name.clone(),
        });
        places.push(place);
    }

    Ok(places)
}

/// Open one listing and harvest its panel. The bounded `h1` wait is what
/// turns a dead panel into a skippable timeout instead of a hang.
fn open_and_harvest(
    session: &MapsSession,
    url: &str,
    options: &ScrapeOptions,
) -> Result<RawListing> {
    session.goto(url)?;
    session.wait_for("h1", options.render_timeout)?;
    std::thread::sleep(options.scroll_delay);

    // The hours table only exists after the widget is opened.
    if session.try_click(r#"button[data-item-id*="oh"]"#) {
        std::thread::sleep(HOURS_WIDGET_SETTLE);
    }

    session.eval_json(extract::HARVEST_JS)
}
