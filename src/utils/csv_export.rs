//! CSV rendering of the ranked location list.

use crate::domain::market::LocationAverage;

/// Download filename offered to the browser.
pub const EXPORT_FILENAME: &str = "house_top10.csv";

/// Errors that can occur while encoding the export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush CSV buffer: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders the ranked list as UTF-8 CSV text.
///
/// Header is `Location,Average Price`, one row per entry. Averages use
/// minimal decimal notation (`150`, not `150.0`). Fields are quoted only
/// when they contain the delimiter, so delimiter-free locations come out
/// bare.
///
/// Callers handle the empty-list no-op; this function happily produces a
/// header-only document.
pub fn write_top_locations_csv(rows: &[LocationAverage]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["Location", "Average Price"])?;
    for row in rows {
        writer.write_record([row.location.as_str(), &row.average_price.to_string()])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
