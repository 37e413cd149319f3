//! The four aggregations behind the dashboard views.
//!
//! Every function borrows an already-filtered slice of rows and returns a freshly
//! built table. Grouping goes through `BTreeMap` so that output never depends on the
//! order rows happen to be stored in; descending sorts are stable, leaving ties in
//! ascending key order.

use crate::domain::order::{OrderRow, Price};
use crate::domain::views::{CategoryCount, DailyOrderCount, RfmRecord, StateOrderCount};
use crate::error::{DashboardError, Result};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Counts line items per product category, most popular first.
pub fn category_counts(rows: &[OrderRow]) -> Vec<CategoryCount> {
    let mut groups: BTreeMap<Option<&str>, u64> = BTreeMap::new();
    for row in rows {
        *groups.entry(row.category.as_deref()).or_default() += 1;
    }

    let mut table: Vec<CategoryCount> = groups
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.map(str::to_owned),
            count,
        })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count));

    debug!(rows = rows.len(), categories = table.len(), "category counts");
    table
}

/// Counts distinct orders per purchase day, oldest day first.
///
/// Days between the first and last purchase day without any order are emitted with a
/// count of zero, so the table is a contiguous daily series.
pub fn daily_order_counts(rows: &[OrderRow]) -> Vec<DailyOrderCount> {
    let mut buckets: BTreeMap<NaiveDate, HashSet<&str>> = BTreeMap::new();
    for row in rows {
        buckets
            .entry(row.purchase_day())
            .or_default()
            .insert(row.order_id.as_str());
    }

    let (Some(first), Some(last)) = (
        buckets.keys().next().copied(),
        buckets.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    let table: Vec<DailyOrderCount> = first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| DailyOrderCount {
            day,
            order_count: buckets.get(&day).map_or(0, |orders| orders.len() as u64),
        })
        .collect();

    debug!(rows = rows.len(), days = table.len(), %first, %last, "daily order counts");
    table
}

/// Counts distinct orders per customer state, busiest state first.
pub fn state_order_counts(rows: &[OrderRow]) -> Vec<StateOrderCount> {
    let mut groups: BTreeMap<Option<&str>, HashSet<&str>> = BTreeMap::new();
    for row in rows {
        groups
            .entry(row.state.as_deref())
            .or_default()
            .insert(row.order_id.as_str());
    }

    let mut table: Vec<StateOrderCount> = groups
        .into_iter()
        .map(|(state, orders)| StateOrderCount {
            state: state.map(str::to_owned),
            order_count: orders.len() as u64,
        })
        .collect();
    table.sort_by(|a, b| b.order_count.cmp(&a.order_count));

    debug!(rows = rows.len(), states = table.len(), "state order counts");
    table
}

/// Builds the per-customer RFM table, ordered by customer id.
///
/// Recency is measured against the latest purchase day found in `rows`, not against
/// the current date.
///
/// # Errors
///
/// Returns [`DashboardError::EmptyDataset`] when `rows` is empty, since there is no
/// reference day to measure recency from.
pub fn rfm_table(rows: &[OrderRow]) -> Result<Vec<RfmRecord>> {
    let recent_date = rows
        .iter()
        .map(OrderRow::purchase_day)
        .max()
        .ok_or(DashboardError::EmptyDataset)?;

    let mut customers: BTreeMap<&str, Vec<&OrderRow>> = BTreeMap::new();
    for row in rows {
        customers
            .entry(row.customer_idx.as_str())
            .or_default()
            .push(row);
    }

    let table: Vec<RfmRecord> = customers
        .into_iter()
        .map(|(customer_idx, purchases)| {
            let monetary: Price = purchases.iter().map(|row| row.price).sum();
            let last_day = purchases
                .iter()
                .map(|row| row.purchase_day())
                .max()
                .unwrap_or(recent_date);
            RfmRecord {
                customer_idx: customer_idx.to_owned(),
                frequency: purchases.len() as u64,
                monetary: monetary.into(),
                recency: (recent_date - last_day).num_days(),
            }
        })
        .collect();

    debug!(rows = rows.len(), customers = table.len(), %recent_date, "rfm table");
    Ok(table)
}
