//! CSV export of list screens.
//!
//! Exports always cover the full matching set of a query, never just the
//! page currently on screen.
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::record::FieldAccess;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush csv writer: {0}")]
    Flush(String),

    #[error("csv output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Writes a header row of `columns` followed by one row per record.
///
/// Absent and `null` fields become empty cells.
pub fn to_csv<R: FieldAccess>(records: &[R], columns: &[&str]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(columns)?;
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| {
                record
                    .field_text(column)
                    .map(|text| text.into_owned())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.to_string()))?;

    Ok(String::from_utf8(bytes)?)
}

/// Download name for an export taken on `date`, e.g. `members-2026-10-19.csv`.
pub fn export_filename(slug: &str, date: NaiveDate) -> String {
    format!("{slug}-{}.csv", date.format("%Y-%m-%d"))
}
