//! Headline figures derived from the aggregated tables.
//!
//! Values stay unformatted; rounding follows the precision the dashboard reports
//! (one decimal for recency, two for frequency and monetary).

use crate::domain::views::{CategoryCount, DailyOrderCount, RfmRecord, StateOrderCount};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Reverse;

/// Total distinct orders across the daily series.
pub fn total_orders(daily: &[DailyOrderCount]) -> u64 {
    daily.iter().map(|d| d.order_count).sum()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryHighlights {
    pub most: Vec<CategoryCount>,
    pub least: Vec<CategoryCount>,
}

/// Picks the `top` most and least popular categories from a table sorted by
/// descending count.
pub fn category_highlights(categories: &[CategoryCount], top: usize) -> CategoryHighlights {
    let mut ascending = categories.to_vec();
    ascending.sort_by_key(|c| c.count);
    ascending.truncate(top);

    CategoryHighlights {
        most: categories.iter().take(top).cloned().collect(),
        least: ascending,
    }
}

pub fn top_states(states: &[StateOrderCount], top: usize) -> Vec<StateOrderCount> {
    states.iter().take(top).cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RfmSummary {
    pub customers: u64,
    pub avg_recency: Decimal,
    pub avg_frequency: Decimal,
    pub avg_monetary: Decimal,
}

/// Averages the RFM table. Returns `None` for an empty table.
pub fn rfm_summary(rfm: &[RfmRecord]) -> Option<RfmSummary> {
    if rfm.is_empty() {
        return None;
    }
    let customers = Decimal::from(rfm.len() as u64);
    let recency: Decimal = rfm.iter().map(|r| Decimal::from(r.recency)).sum();
    let frequency: Decimal = rfm.iter().map(|r| Decimal::from(r.frequency)).sum();
    let monetary: Decimal = rfm.iter().map(|r| r.monetary).sum();

    Some(RfmSummary {
        customers: rfm.len() as u64,
        avg_recency: (recency / customers).round_dp(1),
        avg_frequency: (frequency / customers).round_dp(2),
        avg_monetary: (monetary / customers).round_dp(2),
    })
}

/// Best customers along each RFM axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestCustomers {
    pub by_recency: Vec<RfmRecord>,
    pub by_frequency: Vec<RfmRecord>,
    pub by_monetary: Vec<RfmRecord>,
}

pub fn best_customers(rfm: &[RfmRecord], top: usize) -> BestCustomers {
    BestCustomers {
        by_recency: ranked(rfm, top, |r| r.recency),
        by_frequency: ranked(rfm, top, |r| Reverse(r.frequency)),
        by_monetary: ranked(rfm, top, |r| Reverse(r.monetary)),
    }
}

fn ranked<K: Ord>(
    rfm: &[RfmRecord],
    top: usize,
    key: impl FnMut(&RfmRecord) -> K,
) -> Vec<RfmRecord> {
    let mut sorted = rfm.to_vec();
    sorted.sort_by_key(key);
    sorted.truncate(top);
    sorted
}
