use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Serialize, Serializer};
use std::borrow::Cow;

pub const COL_NAME: &str = "name";
pub const COL_RUNS: &str = "runs";
pub const COL_SUM: &str = "sum";
pub const COL_SUM_SQUARED: &str = "sum_squared";
pub const COL_MIN: &str = "min";
pub const COL_MAX: &str = "max";

/// Columns every results table must carry. Order is irrelevant.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_NAME,
    COL_RUNS,
    COL_SUM,
    COL_SUM_SQUARED,
    COL_MIN,
    COL_MAX,
];

/// Column order of the emitted table.
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "name",
    "mean",
    "stddev",
    "min",
    "max",
    "runs",
    "sum",
    "sum_squared",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    pub(crate) fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}

/// One data row of the results table, before any numeric interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// 1-based data row number (the header is not counted).
    pub row: usize,
    pub(crate) header: &'a Header,
    pub(crate) values: Vec<Cow<'a, str>>,
}

impl RawRecord<'_> {
    pub fn get(&self, column: &str) -> Option<&str> {
        let idx = self.header.index_of(column)?;
        self.values.get(idx).map(|v| v.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkSummary {
    pub name: String,
    pub mean: f64,
    pub stddev: f64,
    #[serde(serialize_with = "serialize_integer")]
    pub min: BigUint,
    #[serde(serialize_with = "serialize_integer")]
    pub max: BigUint,
    #[serde(serialize_with = "serialize_integer")]
    pub runs: BigUint,
    #[serde(serialize_with = "serialize_integer")]
    pub sum: BigUint,
    #[serde(serialize_with = "serialize_integer")]
    pub sum_squared: BigUint,
}

/// Writes integers up to 128 bits as numbers and anything wider as a decimal string.
fn serialize_integer<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    match value.to_u128() {
        Some(v) => serializer.serialize_u128(v),
        None => serializer.collect_str(value),
    }
}
