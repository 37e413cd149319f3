use orderlens::application::report::{DashboardReport, ReportConfig};
use orderlens::domain::ports::OrderSource;
use orderlens::infrastructure::in_memory::InMemoryOrders;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod common;

#[test]
fn test_generated_csv_round_trips_through_loader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.csv");
    let mut rng = StdRng::seed_from_u64(42);
    let rows = common::random_orders(&mut rng, 200);
    common::write_csv(&path, &rows).expect("Failed to generate CSV");

    let orders = InMemoryOrders::open(&path).expect("Failed to load generated CSV");
    assert_eq!(orders.len(), rows.len());

    let report = DashboardReport::build(&orders, &ReportConfig::default()).unwrap();
    assert_eq!(report.rows, rows.len());
    assert_eq!(report.summary.total_orders, 200);
    assert!(report.summary.categories.most.len() <= 5);
}
