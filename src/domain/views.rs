//! Row types of the four derived tables.
//!
//! Each table is a plain `Vec` of these rows, built fresh by its aggregator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Line items sold in one product category. `None` groups rows without a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Option<String>,
    pub count: u64,
}

/// Distinct orders purchased on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyOrderCount {
    pub day: NaiveDate,
    pub order_count: u64,
}

/// Distinct orders placed by customers of one state. `None` groups rows without a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateOrderCount {
    pub state: Option<String>,
    pub order_count: u64,
}

/// Recency, frequency and monetary value of one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RfmRecord {
    pub customer_idx: String,
    /// Line items purchased.
    pub frequency: u64,
    /// Exact sum of the prices of those line items.
    pub monetary: Decimal,
    /// Days between the latest purchase in the table and this customer's latest one.
    pub recency: i64,
}
