// File: crates/chart-data/src/seed.rs
// Summary: Synthetic demo data: one plausible record per month and region.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::record::{Month, NewRecord, Region};

/// 48 records (12 months x 4 regions) for `year`, all stamped `now`.
///
/// Sales are integers in `[80, 220)`, costs 45-70% of sales, tickets
/// 25-70% of sales, satisfaction an integer in `[65, 99)`.
pub fn seed_records<R: Rng + ?Sized>(rng: &mut R, year: i32, now: DateTime<Utc>) -> Vec<NewRecord> {
    let mut out = Vec::with_capacity(Month::ALL.len() * Region::ALL.len());
    for month in Month::ALL {
        for region in Region::ALL {
            let base = (80 + rng.gen_range(0..140)) as f64;
            let costes = (base * (0.45 + rng.gen::<f64>() * 0.25)).round();
            let tickets = (base * (0.25 + rng.gen::<f64>() * 0.45)).round();
            let satisfaccion = (65 + rng.gen_range(0..34)) as f64;
            out.push(NewRecord {
                month,
                year,
                region,
                ventas: base,
                costes,
                tickets,
                satisfaccion,
                created_at: now,
            });
        }
    }
    log::debug!("generated {} seed records for {year}", out.len());
    out
}
