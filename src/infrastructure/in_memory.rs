use crate::domain::date_range::DateRange;
use crate::domain::order::OrderRow;
use crate::domain::ports::OrderSource;
use crate::error::Result;
use crate::interfaces::csv::order_reader::OrderReader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// The loaded order table, kept sorted by purchase timestamp.
///
/// Loaded once by the caller and lent to every report through [`OrderSource`]; a date
/// range therefore maps to one contiguous slice of rows.
#[derive(Debug, Default, Clone)]
pub struct InMemoryOrders {
    rows: Vec<OrderRow>,
}

impl InMemoryOrders {
    /// Builds the table from already-validated rows.
    pub fn new(mut rows: Vec<OrderRow>) -> Self {
        rows.sort_by_key(|row| row.purchased_at);
        Self { rows }
    }

    /// Reads and validates every row from a CSV source, stopping at the first error.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let rows = OrderReader::new(source)?
            .orders()
            .collect::<Result<Vec<_>>>()?;
        info!(rows = rows.len(), "order table loaded");
        Ok(Self::new(rows))
    }

    /// Opens the CSV file at `path` and loads it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn rows(&self) -> &[OrderRow] {
        &self.rows
    }
}

impl OrderSource for InMemoryOrders {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn date_span(&self) -> Option<DateRange> {
        let first = self.rows.first()?;
        let last = self.rows.last()?;
        Some(DateRange::new(first.purchase_day(), last.purchase_day()))
    }

    fn select(&self, range: &DateRange) -> &[OrderRow] {
        if range.is_inverted() {
            return &[];
        }
        let lower = range.lower_bound();
        let start = self.rows.partition_point(|row| row.purchased_at < lower);
        let end = match range.upper_bound_exclusive() {
            Some(upper) => self.rows.partition_point(|row| row.purchased_at < upper),
            None => self.rows.len(),
        };
        &self.rows[start..end]
    }
}
