use crate::record::SocialLinks;
use regex::Regex;
use reqwest::blocking::Client;
use std::time::Duration;

const INSTAGRAM_RE: &str = r"https?://(?:www\.)?instagram\.com/[A-Za-z0-9_.\-/%?=]+";
const FACEBOOK_RE: &str = r"https?://(?:www\.)?facebook\.com/[A-Za-z0-9_.\-/%?=]+";
const LINKEDIN_RE: &str = r"https?://(?:[a-z]{2}\.|www\.)?linkedin\.com/[A-Za-z0-9_.\-/%?=]+";
const X_RE: &str = r"https?://(?:www\.)?(?:twitter|x)\.com/[A-Za-z0-9_.\-/%?=]+";

/// Scan a blob of text (page HTML, href list) for known social domains.
/// First match per platform wins.
pub fn scan_text(text: &str) -> SocialLinks {
    let first = |pattern: &str| {
        Regex::new(pattern)
            .unwrap()
            .find(text)
            .map(|m| m.as_str().to_string())
    };

    SocialLinks {
        instagram: first(INSTAGRAM_RE),
        facebook: first(FACEBOOK_RE),
        linkedin: first(LINKEDIN_RE),
        x: first(X_RE),
    }
}

/// Scan harvested hrefs in page order. First match per platform wins.
pub fn scan_hrefs(hrefs: &[String]) -> SocialLinks {
    scan_text(&hrefs.join("\n"))
}

/// HTTP client for the optional website fetch.
pub fn fetch_client() -> Client {
    Client::builder()
        .user_agent("Mozilla/5.0")
        .timeout(Duration::from_secs(10))
        .build()
        .expect("failed to build http client")
}

/// Best-effort pass over the listing's website: fetch the page and fill any
/// platform still missing. Network failures are swallowed -- the links just
/// stay absent. Matches from the listing page are never overwritten.
pub fn enrich_from_website(links: &mut SocialLinks, website: Option<&str>, client: &Client) {
    if links.is_complete() {
        return;
    }
    let Some(url) = website else {
        return;
    };

    let response = match client.get(url).send() {
        Ok(r) if r.status().is_success() => r,
        Ok(r) => {
            log::debug!("website fetch for social links returned {}", r.status());
            return;
        }
        Err(e) => {
            log::debug!("website fetch for social links failed: {}", e);
            return;
        }
    };

    let Ok(body) = response.text() else {
        return;
    };

    links.merge_missing(scan_text(&body));
}
