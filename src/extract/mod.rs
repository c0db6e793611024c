//! Field extraction
//!
//! A page-side harvest script reads the fixed DOM landmarks of an open
//! listing panel and returns one JSON payload; the Rust side parses that
//! payload into a [`Place`]. Field-level misses leave the field absent --
//! only a missing name makes the listing unusable.

pub mod address;
pub mod hours;
pub mod social;

use crate::record::Place;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Page-side script that harvests the open listing panel.
pub const HARVEST_JS: &str = include_str!("harvest.js");

/// Raw landmark values as harvested from the listing panel, before parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub website: String,

    #[serde(default)]
    pub categories: Vec<String>,

    /// aria-label of the rating widget, e.g. "4.6 stars".
    #[serde(default)]
    pub rating_label: String,

    /// aria-label of the review count, e.g. "1,234 reviews".
    #[serde(default)]
    pub reviews_label: String,

    #[serde(default)]
    pub hours_rows: Vec<HoursRow>,

    /// Every absolute link on the panel, for the social-domain scan.
    #[serde(default)]
    pub hrefs: Vec<String>,
}

/// One row of the opening-hours table as displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRow {
    pub day: String,
    pub times: String,
}

/// Parse a harvested listing into a [`Place`].
///
/// Returns `None` when no usable name was found; such listings are treated
/// as malformed and skipped upstream. All other fields are best-effort.
pub fn extract_place(raw: &RawListing, listing_url: &str, source: &str) -> Option<Place> {
    let name = collapse_ws(&raw.name);
    if name.is_empty() {
        return None;
    }

    let (latitude, longitude) = coords_from_url(listing_url);

    Some(Place {
        name,
        address: address::parse_address(&raw.address),
        phone: non_empty(&raw.phone),
        website: normalize_website(&raw.website),
        rating: parse_rating_label(&raw.rating_label),
        review_count: parse_reviews_label(&raw.reviews_label),
        categories: dedup_in_order(&raw.categories),
        hours: hours::parse_rows(&raw.hours_rows),
        latitude,
        longitude,
        social_links: social::scan_hrefs(&raw.hrefs),
        listing_url: listing_url.to_string(),
        source: source.to_string(),
    })
}

/// First decimal in a label like "4.6 stars", accepted only in the valid
/// rating range. Anything else is absent, never 0.
pub fn parse_rating_label(label: &str) -> Option<f64> {
    let re = Regex::new(r"\d+(?:\.\d+)?").unwrap();
    let value: f64 = re.find(label)?.as_str().parse().ok()?;
    (0.0..=5.0).contains(&value).then_some(value)
}

/// Review count from a label like "1,234 reviews", thousands separators
/// stripped. Absent, never 0, when the label doesn't parse.
pub fn parse_reviews_label(label: &str) -> Option<u64> {
    let re = Regex::new(r"[\d,]+").unwrap();
    re.find(label)?.as_str().replace(',', "").parse().ok()
}

/// Coordinates from the listing URL: the `@lat,lng` viewport form first,
/// then the `!3d<lat>!4d<lng>` data form. Both-or-neither.
pub fn coords_from_url(url: &str) -> (Option<f64>, Option<f64>) {
    let at_re = Regex::new(r"@(-?[0-9.]+),(-?[0-9.]+)").unwrap();
    let data_re = Regex::new(r"!3d(-?[0-9.]+)!4d(-?[0-9.]+)").unwrap();

    for re in [&at_re, &data_re] {
        if let Some(caps) = re.captures(url) {
            let lat = caps[1].parse::<f64>().ok();
            let lng = caps[2].parse::<f64>().ok();
            if let (Some(lat), Some(lng)) = (lat, lng) {
                return (Some(lat), Some(lng));
            }
        }
    }

    (None, None)
}

/// Scheme-normalize a scraped website href. Protocol-relative and bare
/// hosts both come back from the `authority` link.
pub fn normalize_website(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("//") {
        return Some(format!("https:{trimmed}"));
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Some(trimmed.to_string());
    }
    Some(format!("https://{}", trimmed.trim_start_matches('/')))
}

fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn dedup_in_order(items: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let trimmed = item.trim();
        if !trimmed.is_empty() && !out.iter().any(|seen| seen == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_listing() -> RawListing {
        RawListing {
            name: "  The Coffee  House ".to_string(),
            address: "12 High Street, London SW1A 1AA, United Kingdom".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            website: "coffee.example".to_string(),
            categories: vec![
                "Coffee shop".to_string(),
                "Cafe".to_string(),
                "Coffee shop".to_string(),
            ],
            rating_label: "4.6 stars".to_string(),
            reviews_label: "1,234 reviews".to_string(),
            hours_rows: vec![],
            hrefs: vec!["https://instagram.com/coffeehouse".to_string()],
        }
    }

    #[test]
    fn test_extract_place_full() {
        let url = "https://www.google.com/maps/place/x/@51.5014,-0.1419,17z";
        let place = extract_place(&raw_listing(), url, "coffee in London").unwrap();

        assert_eq!(place.name, "The Coffee House");
        assert_eq!(place.phone.as_deref(), Some("+44 20 7946 0000"));
        assert_eq!(place.website.as_deref(), Some("https://coffee.example"));
        assert_eq!(place.rating, Some(4.6));
        assert_eq!(place.review_count, Some(1234));
        assert_eq!(place.categories, vec!["Coffee shop", "Cafe"]);
        assert_eq!(place.latitude, Some(51.5014));
        assert_eq!(place.longitude, Some(-0.1419));
        assert_eq!(
            place.social_links.instagram.as_deref(),
            Some("https://instagram.com/coffeehouse")
        );
        assert_eq!(place.listing_url, url);
        assert_eq!(place.source, "coffee in London");
    }

    #[test]
    fn test_extract_without_name_is_none() {
        let mut raw = raw_listing();
        raw.name = "   ".to_string();
        assert!(extract_place(&raw, "https://example.com", "q").is_none());
    }

    #[test]
    fn test_missing_rating_stays_absent() {
        let mut raw = raw_listing();
        raw.rating_label = String::new();
        raw.reviews_label = "no reviews yet".to_string();
        let place = extract_place(&raw, "https://example.com", "q").unwrap();
        assert_eq!(place.rating, None);
        // "no reviews yet" has no digits to parse.
        assert_eq!(place.review_count, None);
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        assert_eq!(parse_rating_label("47 stars"), None);
        assert_eq!(parse_rating_label("4.2 stars"), Some(4.2));
        assert_eq!(parse_rating_label(""), None);
    }

    #[test]
    fn test_review_count_separators() {
        assert_eq!(parse_reviews_label("1,234 reviews"), Some(1234));
        assert_eq!(parse_reviews_label("87 reviews"), Some(87));
        assert_eq!(parse_reviews_label(""), None);
    }

    #[test]
    fn test_coords_viewport_form() {
        let (lat, lng) = coords_from_url("https://maps.test/place/a/@51.5,-0.14,17z");
        assert_eq!(lat, Some(51.5));
        assert_eq!(lng, Some(-0.14));
    }

    #[test]
    fn test_coords_data_form() {
        let (lat, lng) = coords_from_url("https://maps.test/place/a/data=!3d-33.86!4d151.21");
        assert_eq!(lat, Some(-33.86));
        assert_eq!(lng, Some(151.21));
    }

    #[test]
    fn test_coords_absent() {
        assert_eq!(coords_from_url("https://maps.test/place/a"), (None, None));
    }

    #[test]
    fn test_normalize_website() {
        assert_eq!(
            normalize_website("//coffee.example/home").as_deref(),
            Some("https://coffee.example/home")
        );
        assert_eq!(
            normalize_website("http://coffee.example").as_deref(),
            Some("http://coffee.example")
        );
        assert_eq!(
            normalize_website("coffee.example").as_deref(),
            Some("https://coffee.example")
        );
        assert_eq!(normalize_website("  "), None);
    }
}
