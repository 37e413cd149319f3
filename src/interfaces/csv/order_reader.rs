use crate::domain::order::{OrderRecord, OrderRow, REQUIRED_COLUMNS};
use crate::error::{DashboardError, Result};
use csv::StringRecord;
use std::io::Read;
use tracing::debug;

/// Reads order lines from a CSV source.
///
/// The header is checked against the required columns up front, so a malformed file
/// fails before any row is produced. Columns the engine does not use are ignored.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
    headers: StringRecord,
}

impl<R: Read> OrderReader<R> {
    /// Creates an `OrderReader` from any `Read` source (e.g., File, Stdin).
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::SchemaViolation`] naming the first required column
    /// absent from the header.
    pub fn new(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        let headers = reader.headers()?.clone();

        if let Some(column) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|header| header == **column))
        {
            return Err(DashboardError::SchemaViolation {
                column: (*column).to_string(),
            });
        }
        debug!(columns = headers.len(), "order header accepted");

        Ok(Self { reader, headers })
    }

    /// Returns an iterator that lazily reads and validates order rows.
    pub fn orders(self) -> impl Iterator<Item = Result<OrderRow>> {
        let headers = self.headers;
        self.reader.into_records().map(move |result| {
            let record = result?;
            let line = record.position().map_or(0, |position| position.line());
            let raw: OrderRecord = record.deserialize(Some(&headers))?;
            raw.into_order(line)
        })
    }
}
