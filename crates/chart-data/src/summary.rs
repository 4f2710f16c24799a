// File: crates/chart-data/src/summary.rs
// Summary: Headline KPIs over the filtered records.

use std::fmt;

use crate::record::Record;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub ventas: f64,
    pub costes: f64,
}

impl Summary {
    pub fn of(records: &[Record]) -> Self {
        records.iter().fold(Self::default(), |acc, r| Self {
            count: acc.count + 1,
            ventas: acc.ventas + r.ventas,
            costes: acc.costes + r.costes,
        })
    }

    /// Estimated margin: sales minus costs.
    pub fn margin(&self) -> f64 {
        self.ventas - self.costes
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, ventas {:.0}, costes {:.0}, margen {:.0}",
            self.count,
            self.ventas.round(),
            self.costes.round(),
            self.margin().round()
        )
    }
}
