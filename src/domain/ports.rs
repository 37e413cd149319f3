use super::date_range::DateRange;
use super::order::OrderRow;

/// Read-only access to a loaded order table.
///
/// Implementations own the rows for the lifetime of the caller and lend them out
/// immutably; no aggregation ever retains the borrowed slice.
pub trait OrderSource {
    /// Number of rows held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Earliest and latest purchase day, or `None` for an empty table.
    fn date_span(&self) -> Option<DateRange>;

    /// Rows purchased within `range`, ordered by purchase timestamp.
    fn select(&self, range: &DateRange) -> &[OrderRow];
}
