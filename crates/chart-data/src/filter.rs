// File: crates/chart-data/src/filter.rs
// Summary: Year/region/free-text filters and the choices offered for them.

use serde::{Deserialize, Serialize};

use crate::record::{Record, Region};

/// Active filters; `None` and an empty search mean "all".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub search: String,
}

impl Filters {
    /// Year and region must match exactly; the search text must appear,
    /// case-insensitively, in `"<month> <region>"`.
    pub fn matches(&self, record: &Record) -> bool {
        let by_year = self.year.map_or(true, |y| record.year == y);
        let by_region = self.region.map_or(true, |r| record.region == r);
        let q = self.search.trim().to_lowercase();
        let by_search = q.is_empty()
            || format!("{} {}", record.month.label(), record.region.label())
                .to_lowercase()
                .contains(&q);
        by_year && by_region && by_search
    }

    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    /// Drop a year or region selection that no longer exists in the data.
    pub fn reconcile(&mut self, choices: &FilterChoices) {
        if let Some(y) = self.year {
            if !choices.years.contains(&y) {
                log::debug!("year {y} no longer present; filter reset to all");
                self.year = None;
            }
        }
        if let Some(r) = self.region {
            if !choices.regions.contains(&r) {
                log::debug!("region {r} no longer present; filter reset to all");
                self.region = None;
            }
        }
    }
}

/// Distinct values present in a record set: years newest first, regions by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterChoices {
    pub years: Vec<i32>,
    pub regions: Vec<Region>,
}

impl FilterChoices {
    pub fn from_records(records: &[Record]) -> Self {
        let mut years: Vec<i32> = records.iter().map(|r| r.year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        let mut regions: Vec<Region> = records.iter().map(|r| r.region).collect();
        regions.sort_by_key(|r| r.label());
        regions.dedup();
        Self { years, regions }
    }
}
