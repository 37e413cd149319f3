//! Domain types: validated order rows, date ranges, derived table rows and the
//! port through which a loaded dataset is lent to the engine.

pub mod date_range;
pub mod order;
pub mod ports;
pub mod views;
