//! Turns the fetched sheet into menu records

use crate::csv_parser::parse_csv;
use crate::error::Result;
use crate::models::Record;
use crate::source::MenuSource;

/// Loads the full record set from a source, once per session
pub struct RecordLoader<S> {
    source: S,
}

impl<S: MenuSource> RecordLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and parse the sheet.
    ///
    /// Failures are logged and yield an empty menu: "no data" is a valid
    /// outcome for the caller, not an error.
    pub async fn load(&self) -> Vec<Record> {
        match self.try_load().await {
            Ok(records) => records,
            Err(e) => {
                log::error!(
                    "Failed to load menu sheet from {}: {}",
                    self.source.describe(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Fetch and parse the sheet, surfacing fetch errors
    pub async fn try_load(&self) -> Result<Vec<Record>> {
        let text = self.source.fetch_text().await?;
        let records = records_from_text(&text);
        log::info!(
            "Loaded {} menu records from {}",
            records.len(),
            self.source.describe()
        );
        Ok(records)
    }
}

/// Parse sheet text, using the first row as the header
pub fn records_from_text(text: &str) -> Vec<Record> {
    let mut rows = parse_csv(text).into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    rows.map(|row| Record::from_row(&header, &row)).collect()
}
