use crate::error::{DashboardError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// Columns every order table must carry, in the order they are reported when missing.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "order_id",
    "order_item_id",
    "customer_idx",
    "product_category_name_english",
    "detail_state",
    "price",
    "order_purchase_timestamp",
];

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// A non-negative monetary amount attached to a single line item.
///
/// Wraps `rust_decimal::Decimal` so that sums stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> std::result::Result<Self, String> {
        if value < Decimal::ZERO {
            Err(format!("must be non-negative, got {value}"))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// One line item of one order, validated at ingestion.
///
/// Several rows share an `order_id` when the order has more than one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub order_id: String,
    pub order_item_id: u32,
    pub customer_idx: String,
    pub category: Option<String>,
    pub state: Option<String>,
    pub price: Price,
    pub purchased_at: NaiveDateTime,
}

impl OrderRow {
    /// Calendar day of the purchase, time of day discarded.
    pub fn purchase_day(&self) -> NaiveDate {
        self.purchased_at.date()
    }
}

/// The raw shape of an order line as it appears in the source file.
///
/// Every aggregation-critical field is optional here so that a missing value can be
/// reported with its column and line instead of a generic deserialization failure.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderRecord {
    pub order_id: Option<String>,
    pub order_item_id: Option<u32>,
    pub customer_idx: Option<String>,
    pub product_category_name_english: Option<String>,
    pub detail_state: Option<String>,
    /// Kept as text and parsed with `Decimal::from_str`, which preserves every digit
    /// and the scale.
    pub price: Option<String>,
    pub order_purchase_timestamp: Option<String>,
}

impl OrderRecord {
    /// Validates the record read at `line` into an `OrderRow`.
    pub fn into_order(self, line: u64) -> Result<OrderRow> {
        let missing = |column: &'static str| DashboardError::DataIntegrity {
            line,
            column,
            reason: "is missing".to_string(),
        };

        let order_id = self.order_id.ok_or_else(|| missing("order_id"))?;
        let order_item_id = self.order_item_id.ok_or_else(|| missing("order_item_id"))?;
        let customer_idx = self.customer_idx.ok_or_else(|| missing("customer_idx"))?;
        let raw_price = self.price.ok_or_else(|| missing("price"))?;
        let price = Decimal::from_str(&raw_price)
            .map_err(|err| format!("is not a decimal amount ({raw_price}): {err}"))
            .and_then(Price::new)
            .map_err(|reason| DashboardError::DataIntegrity {
                line,
                column: "price",
                reason,
            })?;
        let raw_timestamp = self
            .order_purchase_timestamp
            .ok_or_else(|| missing("order_purchase_timestamp"))?;
        let purchased_at =
            parse_timestamp(&raw_timestamp).ok_or(DashboardError::InvalidTimestamp {
                line,
                value: raw_timestamp,
            })?;

        Ok(OrderRow {
            order_id,
            order_item_id,
            customer_idx,
            category: self.product_category_name_english,
            state: self.detail_state,
            price,
            purchased_at,
        })
    }
}

/// Parses a purchase timestamp; a bare date is taken as midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|day| day.and_hms_opt(0, 0, 0))
        })
}
