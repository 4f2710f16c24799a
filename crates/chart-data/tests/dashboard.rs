// File: crates/chart-data/tests/dashboard.rs
// Purpose: Whole-dashboard rendering and PNG output.

use bizchart_data::{seed_records, Dashboard, DashboardContext, DashboardOptions, MemoryStore, RecordStore};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn renders_empty_dashboard() {
    let mut ctx = DashboardContext::default();
    ctx.refresh(&MemoryStore::new()).unwrap();
    let mut dash = Dashboard::new(320, 200, false).unwrap();
    dash.render(&ctx.chart_data(), &DashboardOptions::default());
    assert_eq!(dash.bar.pixel(5, 5).unwrap(), [255, 255, 255, 255]);
    for (_, s) in dash.surfaces_mut() {
        assert_eq!(s.width(), 320);
    }
}

#[test]
fn writes_six_pngs() {
    let mut store = MemoryStore::new();
    store.insert_many(seed_records(&mut StdRng::seed_from_u64(3), 2026, Utc::now())).unwrap();
    let mut ctx = DashboardContext::default();
    ctx.refresh(&store).unwrap();

    let mut dash = Dashboard::new(480, 240, true).unwrap();
    dash.render(&ctx.chart_data(), &DashboardOptions::default());
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../target/test_out/dashboard");
    let written = dash.write_pngs(&dir).unwrap();
    assert_eq!(written.len(), 6);
    for path in written {
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "{}", path.display());
    }
}
