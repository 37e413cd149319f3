use super::aggregate::{category_counts, daily_order_counts, rfm_table, state_order_counts};
use super::summary::{
    BestCustomers, CategoryHighlights, RfmSummary, best_customers, category_highlights,
    rfm_summary, top_states, total_orders,
};
use crate::domain::date_range::DateRange;
use crate::domain::order::OrderRow;
use crate::domain::ports::OrderSource;
use crate::domain::views::{CategoryCount, DailyOrderCount, RfmRecord, StateOrderCount};
use crate::error::Result;
use serde::Serialize;
use tracing::{info, warn};

/// Caller policy for restricting the dataset and sizing the highlight lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Inclusive day range. `None` selects the whole dataset span.
    pub range: Option<DateRange>,
    /// Days added to both ends of the range before selecting.
    pub pad_days: u64,
    /// Length of every top/bottom list in the summary.
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            range: None,
            pad_days: 0,
            top: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_orders: u64,
    pub categories: CategoryHighlights,
    pub top_states: Vec<StateOrderCount>,
    pub rfm: Option<RfmSummary>,
    pub best_customers: Option<BestCustomers>,
}

/// Everything the dashboard renders for one date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardReport {
    /// Range actually applied, after padding. `None` when the dataset is empty.
    pub range: Option<DateRange>,
    pub rows: usize,
    pub categories: Vec<CategoryCount>,
    pub daily_orders: Vec<DailyOrderCount>,
    pub states: Vec<StateOrderCount>,
    /// Absent when the selection is empty.
    pub rfm: Option<Vec<RfmRecord>>,
    pub summary: ReportSummary,
}

impl DashboardReport {
    /// Selects rows from `source` according to `config` and runs every aggregation.
    pub fn build(source: &dyn OrderSource, config: &ReportConfig) -> Result<Self> {
        let range = config
            .range
            .or_else(|| source.date_span())
            .map(|range| range.padded(config.pad_days));

        let rows: &[OrderRow] = match &range {
            Some(range) => {
                if range.is_inverted() {
                    warn!(
                        start = %range.start,
                        end = %range.end,
                        "date range is inverted, selection is empty"
                    );
                }
                source.select(range)
            }
            None => &[],
        };
        info!(selected = rows.len(), total = source.len(), "building dashboard report");

        let categories = category_counts(rows);
        let daily_orders = daily_order_counts(rows);
        let states = state_order_counts(rows);
        let rfm = if rows.is_empty() {
            None
        } else {
            Some(rfm_table(rows)?)
        };

        let summary = ReportSummary {
            total_orders: total_orders(&daily_orders),
            categories: category_highlights(&categories, config.top),
            top_states: top_states(&states, config.top),
            rfm: rfm.as_deref().and_then(rfm_summary),
            best_customers: rfm.as_deref().map(|rfm| best_customers(rfm, config.top)),
        };

        Ok(Self {
            range,
            rows: rows.len(),
            categories,
            daily_orders,
            states,
            rfm,
            summary,
        })
    }
}
