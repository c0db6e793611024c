use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// A validated search input: either a free-text query turned into a Maps
/// search URL, or a full Maps URL taken as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchInput {
    /// URL the browser will be pointed at.
    pub url: String,

    /// Human-readable run title, used for the output file stem.
    pub title: String,
}

impl SearchInput {
    /// Classify and validate the user input.
    ///
    /// Anything starting with a scheme is treated as a Maps URL; its `q=`
    /// parameter or `/maps/search/<term>` segment names the run. Everything
    /// else is percent-encoded into a Maps search URL.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput(
                "search query or Maps URL is empty".to_string(),
            ));
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Self {
                url: trimmed.to_string(),
                title: title_from_url(trimmed),
            })
        } else {
            Ok(Self {
                url: format!(
                    "https://www.google.com/maps/search/{}",
                    urlencoding::encode(trimmed)
                ),
                title: trimmed.to_string(),
            })
        }
    }

    /// Sanitized form of the title usable as an output file stem.
    pub fn file_stem(&self) -> String {
        let safe = Regex::new(r"[^A-Za-z0-9_\-]+")
            .unwrap()
            .replace_all(&self.title, "_")
            .trim_matches('_')
            .to_string();
        if safe.is_empty() { "results".to_string() } else { safe }
    }
}

/// Derive a run title from a Maps URL: `q=` parameter first, then the
/// `/maps/search/<term>` path segment, else a generic fallback.
fn title_from_url(raw: &str) -> String {
    if let Ok(parsed) = Url::parse(raw) {
        if let Some((_, q)) = parsed.query_pairs().find(|(k, _)| k == "q") {
            return q.into_owned();
        }
    }

    let search_re = Regex::new(r"/maps/search/([^/?]+)").unwrap();
    if let Some(caps) = search_re.captures(raw) {
        let segment = caps[1].replace('+', " ");
        return urlencoding::decode(&segment)
            .map(|s| s.into_owned())
            .unwrap_or(segment);
    }

    "google_maps_results".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_query() {
        let input = SearchInput::parse("restaurants in London").unwrap();
        assert_eq!(
            input.url,
            "https://www.google.com/maps/search/restaurants%20in%20London"
        );
        assert_eq!(input.title, "restaurants in London");
    }

    #[test]
    fn test_full_url_passes_through() {
        let raw = "https://www.google.com/maps/search/dentists+in+Karachi";
        let input = SearchInput::parse(raw).unwrap();
        assert_eq!(input.url, raw);
        assert_eq!(input.title, "dentists in Karachi");
    }

    #[test]
    fn test_url_with_q_parameter() {
        let raw = "https://www.google.com/maps?q=coffee%20shops";
        let input = SearchInput::parse(raw).unwrap();
        assert_eq!(input.title, "coffee shops");
    }

    #[test]
    fn test_url_without_recognizable_term() {
        let raw = "https://www.google.com/maps/@51.5,-0.14,12z";
        let input = SearchInput::parse(raw).unwrap();
        assert_eq!(input.title, "google_maps_results");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            SearchInput::parse("   "),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(SearchInput::parse(""), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_file_stem_sanitization() {
        let input = SearchInput::parse("cafés & bars, Berlin!").unwrap();
        assert_eq!(input.file_stem(), "caf_s_bars_Berlin");

        let input = SearchInput::parse("///").unwrap();
        assert_eq!(input.file_stem(), "results");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let input = SearchInput::parse("  pizza  ").unwrap();
        assert_eq!(input.title, "pizza");
        assert_eq!(input.url, "https://www.google.com/maps/search/pizza");
    }
}
