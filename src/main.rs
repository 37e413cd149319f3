use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use orderlens::application::report::{DashboardReport, ReportConfig};
use orderlens::domain::date_range::DateRange;
use orderlens::domain::ports::OrderSource;
use orderlens::infrastructure::in_memory::InMemoryOrders;
use orderlens::interfaces::csv::report_writer::ReportWriter;
use orderlens::interfaces::json::write_json;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    All,
    Categories,
    Daily,
    States,
    Rfm,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders CSV file
    input: PathBuf,

    /// First purchase day to include (YYYY-MM-DD). Defaults to the earliest day in the data.
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last purchase day to include (YYYY-MM-DD). Defaults to the latest day in the data.
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Extra days to include on both sides of the range
    #[arg(long, default_value_t = 0)]
    pad_days: u64,

    /// Which table to print
    #[arg(long, value_enum, default_value_t = View::All)]
    view: View,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Length of the top/bottom lists in the summary
    #[arg(long, default_value_t = 5)]
    top: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let orders = InMemoryOrders::open(&cli.input)?;
    let range = orders.date_span().map(|span| {
        DateRange::new(
            cli.start.unwrap_or(span.start),
            cli.end.unwrap_or(span.end),
        )
    });
    let config = ReportConfig {
        range,
        pad_days: cli.pad_days,
        top: cli.top,
    };
    let report = DashboardReport::build(&orders, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Csv => write_csv(&mut out, &report, cli.view)?,
        Format::Json => {
            let rfm = report.rfm.as_deref().unwrap_or_default();
            match cli.view {
                View::All => write_json(&mut out, &report)?,
                View::Categories => write_json(&mut out, &report.categories)?,
                View::Daily => write_json(&mut out, &report.daily_orders)?,
                View::States => write_json(&mut out, &report.states)?,
                View::Rfm => write_json(&mut out, rfm)?,
                View::Summary => write_json(&mut out, &report.summary)?,
            }
        }
    }
    out.flush().into_diagnostic()?;

    Ok(())
}

fn write_csv<W: Write>(out: W, report: &DashboardReport, view: View) -> Result<()> {
    let mut writer = ReportWriter::new(out);
    let rfm = report.rfm.as_deref().unwrap_or_default();

    if matches!(view, View::All | View::Categories) {
        writer.write_categories(&report.categories)?;
    }
    if matches!(view, View::All | View::Daily) {
        writer.write_daily_orders(&report.daily_orders)?;
    }
    if matches!(view, View::All | View::States) {
        writer.write_states(&report.states)?;
    }
    if matches!(view, View::All | View::Rfm) {
        writer.write_rfm(rfm)?;
    }
    if matches!(view, View::All | View::Summary) {
        writer.write_summary(&report.summary)?;
    }
    Ok(())
}
