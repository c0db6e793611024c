//! Export writers
//!
//! Serialize a record set to CSV and XLSX with a fixed column set. Both
//! writers share one row builder, so cell values are identical across
//! formats and across repeated exports of the same records; only the XLSX
//! container carries formatting (the bold header row).

pub mod csv;
pub mod xlsx;

pub use self::csv::to_csv;
pub use self::xlsx::to_xlsx;

use crate::record::{Place, Weekday};

/// Column set shared by both formats. Order is part of the contract.
pub const COLUMNS: [&str; 26] = [
    "s_no",
    "name",
    "street",
    "city",
    "zip",
    "country",
    "phone",
    "website",
    "rating",
    "review_count",
    "categories",
    "monday_hours",
    "tuesday_hours",
    "wednesday_hours",
    "thursday_hours",
    "friday_hours",
    "saturday_hours",
    "sunday_hours",
    "latitude",
    "longitude",
    "instagram_url",
    "facebook_url",
    "linkedin_url",
    "x_url",
    "listing_url",
    "source",
];

/// Flatten one record into its row, `s_no` being the 1-based position in
/// the result set. Absent values render as empty cells, never `0`.
pub fn record_row(s_no: usize, place: &Place) -> Vec<String> {
    let mut row = Vec::with_capacity(COLUMNS.len());

    row.push(s_no.to_string());
    row.push(place.name.clone());
    row.push(opt_str(place.address.street.as_deref()));
    row.push(opt_str(place.address.city.as_deref()));
    row.push(opt_str(place.address.zip.as_deref()));
    row.push(opt_str(place.address.country.as_deref()));
    row.push(opt_str(place.phone.as_deref()));
    row.push(opt_str(place.website.as_deref()));
    row.push(opt_num(place.rating));
    row.push(place.review_count.map(|c| c.to_string()).unwrap_or_default());
    row.push(place.categories.join("; "));
    for day in Weekday::ALL {
        row.push(place.hours.get(day).to_cell());
    }
    row.push(opt_num(place.latitude));
    row.push(opt_num(place.longitude));
    row.push(opt_str(place.social_links.instagram.as_deref()));
    row.push(opt_str(place.social_links.facebook.as_deref()));
    row.push(opt_str(place.social_links.linkedin.as_deref()));
    row.push(opt_str(place.social_links.x.as_deref()));
    row.push(place.listing_url.clone());
    row.push(place.source.clone());

    row
}

fn opt_str(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn opt_num(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
