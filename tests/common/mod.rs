#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use orderlens::domain::order::{OrderRow, Price, parse_timestamp};
use rand::Rng;
use rust_decimal::Decimal;
use std::fs::File;
use std::path::Path;

pub const HEADER: [&str; 7] = [
    "order_id",
    "order_item_id",
    "customer_idx",
    "product_category_name_english",
    "detail_state",
    "price",
    "order_purchase_timestamp",
];

const CATEGORIES: [Option<&str>; 5] = [
    Some("toys"),
    Some("books"),
    Some("garden"),
    Some("health_beauty"),
    None,
];
const STATES: [Option<&str>; 4] = [Some("SP"), Some("RJ"), Some("MG"), None];

pub fn order(
    order_id: &str,
    customer: &str,
    category: Option<&str>,
    price: Decimal,
    timestamp: &str,
) -> OrderRow {
    OrderRow {
        order_id: order_id.to_string(),
        order_item_id: 1,
        customer_idx: customer.to_string(),
        category: category.map(str::to_string),
        state: Some("SP".to_string()),
        price: Price::new(price).expect("test prices are non-negative"),
        purchased_at: parse_timestamp(timestamp).expect("test timestamps are well formed"),
    }
}

/// Random order lines spread over 30 days; orders have one to three items that share
/// customer, state and timestamp.
pub fn random_orders<R: Rng>(rng: &mut R, orders: usize) -> Vec<OrderRow> {
    let epoch = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let mut rows = Vec::new();
    for id in 0..orders {
        let customer = format!("c{}", rng.gen_range(0..orders.max(2) / 2));
        let state = STATES[rng.gen_range(0..STATES.len())];
        let purchased_at = epoch + Duration::seconds(rng.gen_range(0..30 * 86_400));
        for item in 1..=rng.gen_range(1..=3u32) {
            rows.push(OrderRow {
                order_id: format!("o{id}"),
                order_item_id: item,
                customer_idx: customer.clone(),
                category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].map(str::to_string),
                state: state.map(str::to_string),
                price: Price::new(Decimal::new(rng.gen_range(0..100_000), 2)).unwrap(),
                purchased_at,
            });
        }
    }
    rows
}

pub fn write_csv(path: &Path, rows: &[OrderRow]) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    for row in rows {
        wtr.write_record([
            row.order_id.clone(),
            row.order_item_id.to_string(),
            row.customer_idx.clone(),
            row.category.clone().unwrap_or_default(),
            row.state.clone().unwrap_or_default(),
            row.price.value().to_string(),
            row.purchased_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
