use crate::error::{Error, Result};
use crate::export::{record_row, COLUMNS};
use crate::record::Place;

/// Serialize the record set to CSV bytes: UTF-8, comma-delimited, header
/// row first, one row per record in result-set order.
pub fn to_csv(places: &[Place]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for (i, place) in places.iter().enumerate() {
        writer.write_record(record_row(i + 1, place))?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Io(std::io::Error::new(e.error().kind(), e.to_string())))
}
