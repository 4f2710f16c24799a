// File: crates/chart-data/src/csv_io.rs
// Summary: CSV export of stored records and import of new ones.

use std::io::{Read, Write};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Result;
use crate::record::{Month, NewRecord, Record, Region};

/// Write `records` with a header row
/// (`id,month,year,region,ventas,costes,tickets,satisfaccion,created_at`).
pub fn write_csv<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Import row: `id` is ignored (the store issues a new one) and a missing
/// `created_at` means "now".
#[derive(Deserialize)]
struct ImportRow {
    #[serde(default)]
    #[allow(dead_code)]
    id: Option<u64>,
    month: Month,
    year: i32,
    region: Region,
    ventas: f64,
    costes: f64,
    tickets: f64,
    satisfaccion: f64,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<NewRecord>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
    let now = Utc::now();
    let mut out = Vec::new();
    for row in rdr.deserialize::<ImportRow>() {
        let row = row?;
        out.push(NewRecord {
            month: row.month,
            year: row.year,
            region: row.region,
            ventas: row.ventas,
            costes: row.costes,
            tickets: row.tickets,
            satisfaccion: row.satisfaccion,
            created_at: row.created_at.unwrap_or(now),
        });
    }
    Ok(out)
}
