use crate::application::report::ReportSummary;
use crate::domain::views::{CategoryCount, DailyOrderCount, RfmRecord, StateOrderCount};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Metric<'a> {
    metric: &'a str,
    value: String,
}

/// Writes derived tables as CSV blocks.
///
/// Each table starts with its own header row, written even when the table is empty,
/// and consecutive tables are separated by a single blank line.
pub struct ReportWriter<W: Write> {
    out: W,
    blocks: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, blocks: 0 }
    }

    pub fn write_categories(&mut self, table: &[CategoryCount]) -> Result<()> {
        self.write_block(&["category", "count"], table)
    }

    pub fn write_daily_orders(&mut self, table: &[DailyOrderCount]) -> Result<()> {
        self.write_block(&["day", "order_count"], table)
    }

    pub fn write_states(&mut self, table: &[StateOrderCount]) -> Result<()> {
        self.write_block(&["state", "order_count"], table)
    }

    pub fn write_rfm(&mut self, table: &[RfmRecord]) -> Result<()> {
        self.write_block(
            &["customer_idx", "frequency", "monetary", "recency"],
            table,
        )
    }

    /// Writes the headline figures as `metric,value` pairs.
    pub fn write_summary(&mut self, summary: &ReportSummary) -> Result<()> {
        let mut metrics = vec![Metric {
            metric: "total_orders",
            value: summary.total_orders.to_string(),
        }];
        if let Some(rfm) = &summary.rfm {
            metrics.extend([
                Metric {
                    metric: "customers",
                    value: rfm.customers.to_string(),
                },
                Metric {
                    metric: "avg_recency",
                    value: rfm.avg_recency.to_string(),
                },
                Metric {
                    metric: "avg_frequency",
                    value: rfm.avg_frequency.to_string(),
                },
                Metric {
                    metric: "avg_monetary",
                    value: rfm.avg_monetary.to_string(),
                },
            ]);
        }
        self.write_block(&["metric", "value"], &metrics)
    }

    fn write_block<T: Serialize>(&mut self, header: &[&str], rows: &[T]) -> Result<()> {
        if self.blocks > 0 {
            writeln!(self.out)?;
        }
        self.blocks += 1;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut self.out);
        writer.write_record(header)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
