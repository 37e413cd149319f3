//! Application layer: the aggregation engine and the report assembled from it.
//!
//! `aggregate` holds the four pure aggregations. `report` wires them to an
//! [`OrderSource`](crate::domain::ports::OrderSource) and a date range, and `summary`
//! derives the headline figures shown next to each table.

pub mod aggregate;
pub mod report;
pub mod summary;
