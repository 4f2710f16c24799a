// File: crates/chart-data/src/record.rs
// Summary: Record model with typed month/region/metric keys.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Calendar month used as the time bucket, in canonical order.
/// Files and flags accept any letter case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Month {
    Ene,
    Feb,
    Mar,
    Abr,
    May,
    Jun,
    Jul,
    Ago,
    Sep,
    Oct,
    Nov,
    Dic,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Ene, Month::Feb, Month::Mar, Month::Abr, Month::May, Month::Jun,
        Month::Jul, Month::Ago, Month::Sep, Month::Oct, Month::Nov, Month::Dic,
    ];

    /// Position in `ALL`.
    pub fn index(self) -> usize { self as usize }

    pub fn label(self) -> &'static str {
        match self {
            Month::Ene => "Ene",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Abr => "Abr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Ago => "Ago",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dic => "Dic",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|m| m.label().to_string()).collect()
    }
}

/// Sales region, the categorical dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Region {
    Norte,
    Sur,
    Este,
    Oeste,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Norte, Region::Sur, Region::Este, Region::Oeste];

    pub fn index(self) -> usize { self as usize }

    pub fn label(self) -> &'static str {
        match self {
            Region::Norte => "Norte",
            Region::Sur => "Sur",
            Region::Este => "Este",
            Region::Oeste => "Oeste",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|r| r.label().to_string()).collect()
    }
}

/// One of the four numeric fields of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Metric {
    #[default]
    Ventas,
    Costes,
    Tickets,
    Satisfaccion,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Ventas, Metric::Costes, Metric::Tickets, Metric::Satisfaccion];

    /// Field name, as used in files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Metric::Ventas => "ventas",
            Metric::Costes => "costes",
            Metric::Tickets => "tickets",
            Metric::Satisfaccion => "satisfaccion",
        }
    }

    /// Human-facing label (radar spokes).
    pub fn label(self) -> &'static str {
        match self {
            Metric::Ventas => "Ventas",
            Metric::Costes => "Costes",
            Metric::Tickets => "Tickets",
            Metric::Satisfaccion => "Satisfacción",
        }
    }
}

fn parse_label<T: Copy>(kind: &'static str, s: &str, all: &[T], name: impl Fn(T) -> &'static str) -> Result<T, DataError> {
    let want = s.trim();
    all.iter()
        .copied()
        .find(|&v| name(v).eq_ignore_ascii_case(want))
        .ok_or_else(|| DataError::UnknownLabel { kind, value: s.to_string() })
}

impl FromStr for Month {
    type Err = DataError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("month", s, &Month::ALL, Month::label)
    }
}

impl FromStr for Region {
    type Err = DataError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("region", s, &Region::ALL, Region::label)
    }
}

impl FromStr for Metric {
    type Err = DataError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("metric", s, &Metric::ALL, Metric::key)
    }
}

macro_rules! parse_from_string {
    ($($t:ty),*) => {$(
        impl TryFrom<String> for $t {
            type Error = DataError;
            fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
        }
    )*};
}

parse_from_string!(Month, Region, Metric);

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.label()) }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.label()) }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.key()) }
}

/// A stored observation. `id` is issued by the store.
/// Metrics are assumed non-negative; nothing here enforces it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub month: Month,
    pub year: i32,
    pub region: Region,
    pub ventas: f64,
    pub costes: f64,
    pub tickets: f64,
    pub satisfaccion: f64,
    pub created_at: DateTime<Utc>,
}

impl Record {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Ventas => self.ventas,
            Metric::Costes => self.costes,
            Metric::Tickets => self.tickets,
            Metric::Satisfaccion => self.satisfaccion,
        }
    }
}

/// A record before the store has assigned its id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub month: Month,
    pub year: i32,
    pub region: Region,
    pub ventas: f64,
    pub costes: f64,
    pub tickets: f64,
    pub satisfaccion: f64,
    pub created_at: DateTime<Utc>,
}

impl NewRecord {
    /// All metrics zero, created now.
    pub fn new(month: Month, year: i32, region: Region) -> Self {
        Self {
            month,
            year,
            region,
            ventas: 0.0,
            costes: 0.0,
            tickets: 0.0,
            satisfaccion: 0.0,
            created_at: Utc::now(),
        }
    }

    pub fn with_metric(mut self, metric: Metric, value: f64) -> Self {
        *match metric {
            Metric::Ventas => &mut self.ventas,
            Metric::Costes => &mut self.costes,
            Metric::Tickets => &mut self.tickets,
            Metric::Satisfaccion => &mut self.satisfaccion,
        } = value;
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn into_record(self, id: u64) -> Record {
        Record {
            id,
            month: self.month,
            year: self.year,
            region: self.region,
            ventas: self.ventas,
            costes: self.costes,
            tickets: self.tickets,
            satisfaccion: self.satisfaccion,
            created_at: self.created_at,
        }
    }
}
