// File: crates/chart-core/src/series.rs
// Summary: Renderer inputs: labeled value series and the labeled matrix used by the heatmap.
// Notes:
// - Lengths are not enforced. Renderers pair entries by index and ignore the
//   surplus of the longer side, so malformed input misaligns but never panics.

use crate::scale::Value;

/// Ordered labels paired 1:1 with ordered values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<Value>,
}

impl Series {
    pub fn new(labels: Vec<String>, values: Vec<Value>) -> Self {
        Self { labels, values }
    }

    /// Build from `(label, value)` pairs.
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, Value)>) -> Self {
        let (labels, values): (Vec<String>, Vec<Value>) = pairs.into_iter().map(|(l, v)| (l.into(), v)).unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn total(&self) -> Value { self.values.iter().sum() }

    /// Value recorded under `label`, if any.
    pub fn get(&self, label: &str) -> Option<Value> {
        self.labels.iter().position(|l| l == label).and_then(|i| self.values.get(i).copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.labels.iter().map(String::as_str).zip(self.values.iter().copied())
    }
}

/// Row labels, column labels and a row-major `rows x cols` grid of values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatrixSeries {
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    pub matrix: Vec<Vec<Value>>,
}

impl MatrixSeries {
    /// All-zero matrix shaped by the given labels.
    pub fn zeros(rows: Vec<String>, cols: Vec<String>) -> Self {
        let matrix = vec![vec![0.0; cols.len()]; rows.len()];
        Self { rows, cols, matrix }
    }

    /// `(rows, cols)` of the value grid.
    pub fn shape(&self) -> (usize, usize) {
        (self.matrix.len(), self.matrix.first().map_or(0, Vec::len))
    }

    pub fn total(&self) -> Value {
        self.matrix.iter().flatten().sum()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Value> {
        self.matrix.get(row)?.get(col).copied()
    }
}
