use serde::{Deserialize, Serialize};

/// One scraped business listing.
///
/// A `Place` is immutable once produced by the extractor; the result set for
/// a run only ever appends. Optional fields stay `None` when the listing did
/// not expose them -- absent is never rendered as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Business name. Required; listings without one are skipped upstream.
    pub name: String,

    /// Best-effort structured address plus the raw line it was parsed from.
    pub address: Address,

    /// Phone number as displayed on the listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Website URL, scheme-normalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Star rating, 0.0-5.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Number of reviews backing the rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u64>,

    /// Category chips in first-seen order, de-duplicated.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Opening hours, one entry per weekday.
    #[serde(default)]
    pub hours: WeeklyHours,

    /// Decimal degrees from the listing URL, if resolvable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Social profile URLs discovered on the listing or its website.
    #[serde(default)]
    pub social_links: SocialLinks,

    /// The Maps URL this listing was opened from.
    pub listing_url: String,

    /// The query or URL the run was started with.
    pub source: String,
}

impl Place {
    /// Identity key for run-scoped deduplication: normalized name and
    /// normalized raw address line, joined on a separator that cannot occur
    /// in either.
    pub fn dedup_key(&self) -> String {
        format!(
            "{}\u{1}{}",
            normalize_key(&self.name),
            normalize_key(&self.address.line)
        )
    }
}

/// Lower-cased, whitespace-collapsed form of a field, used for dedup keys.
pub fn normalize_key(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Address components parsed from the single comma-delimited line Maps shows.
///
/// Parsing is positional and best-effort; non-standard formats leave
/// components `None` while the raw line is always retained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// The raw address line as scraped.
    pub line: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Days of the week, Monday first to match the Maps hours widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Three-letter prefix used to match the widget's day labels.
    pub fn short(self) -> &'static str {
        match self {
            Weekday::Monday => "mon",
            Weekday::Tuesday => "tue",
            Weekday::Wednesday => "wed",
            Weekday::Thursday => "thu",
            Weekday::Friday => "fri",
            Weekday::Saturday => "sat",
            Weekday::Sunday => "sun",
        }
    }

    /// Export column name for this day.
    pub fn column(self) -> &'static str {
        match self {
            Weekday::Monday => "monday_hours",
            Weekday::Tuesday => "tuesday_hours",
            Weekday::Wednesday => "wednesday_hours",
            Weekday::Thursday => "thursday_hours",
            Weekday::Friday => "friday_hours",
            Weekday::Saturday => "saturday_hours",
            Weekday::Sunday => "sunday_hours",
        }
    }
}

/// Opening hours for a single day.
///
/// `Unspecified` means the widget had no row for the day; it is distinct
/// from an explicit `Closed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum DayHours {
    Open { open: String, close: String },
    Open24Hours,
    Closed,
    #[default]
    Unspecified,
}

impl DayHours {
    /// Render for a spreadsheet cell. `Unspecified` becomes the empty cell,
    /// which keeps it distinguishable from `Closed`.
    pub fn to_cell(&self) -> String {
        match self {
            DayHours::Open { open, close } => format!("{open} to {close}"),
            DayHours::Open24Hours => "Open 24 hours".to_string(),
            DayHours::Closed => "Closed".to_string(),
            DayHours::Unspecified => String::new(),
        }
    }

    /// Inverse of [`DayHours::to_cell`]; anything unrecognized is
    /// `Unspecified`.
    pub fn from_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return DayHours::Unspecified;
        }
        if trimmed.eq_ignore_ascii_case("closed") {
            return DayHours::Closed;
        }
        if trimmed.eq_ignore_ascii_case("open 24 hours") {
            return DayHours::Open24Hours;
        }
        match trimmed.split_once(" to ") {
            Some((open, close)) => DayHours::Open {
                open: open.trim().to_string(),
                close: close.trim().to_string(),
            },
            None => DayHours::Unspecified,
        }
    }
}

/// One [`DayHours`] per weekday.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyHours {
    days: [DayHours; 7],
}

impl WeeklyHours {
    pub fn get(&self, day: Weekday) -> &DayHours {
        &self.days[day as usize]
    }

    pub fn set(&mut self, day: Weekday, hours: DayHours) {
        self.days[day as usize] = hours;
    }

    /// Number of days with an actual entry (anything but `Unspecified`).
    pub fn specified_count(&self) -> usize {
        self.days
            .iter()
            .filter(|d| !matches!(d, DayHours::Unspecified))
            .count()
    }
}

/// Social profile URLs keyed by platform. First match per platform wins;
/// matches from the listing page take precedence over the website page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
}

impl SocialLinks {
    /// Fill platforms still missing here from `other`, never overwriting.
    pub fn merge_missing(&mut self, other: SocialLinks) {
        if self.instagram.is_none() {
            self.instagram = other.instagram;
        }
        if self.facebook.is_none() {
            self.facebook = other.facebook;
        }
        if self.linkedin.is_none() {
            self.linkedin = other.linkedin;
        }
        if self.x.is_none() {
            self.x = other.x;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.instagram.is_none()
            && self.facebook.is_none()
            && self.linkedin.is_none()
            && self.x.is_none()
    }

    /// Whether every platform already has a link, making further scanning
    /// pointless.
    pub fn is_complete(&self) -> bool {
        self.instagram.is_some()
            && self.facebook.is_some()
            && self.linkedin.is_some()
            && self.x.is_some()
    }
}
