use crate::results::error::ResultsError;
use crate::results::hex::{HexError, parse_hex};
use crate::results::table::ResultsTable;
use crate::results::types::{
    BenchmarkSummary, COL_MAX, COL_MIN, COL_NAME, COL_RUNS, COL_SUM, COL_SUM_SQUARED, RawRecord,
};
use clap::ValueEnum;
use num_bigint::BigUint;
use num_rational::Ratio;
use num_traits::{ToPrimitive, Zero};

/// How variance is computed from the aggregates `n`, `sum(x)` and `sum(x^2)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum VarianceFormula {
    /// `(sum(x^2) - 2*mean*sum(x) + n*mean^2) / n`
    ///
    /// Loses precision to cancellation for large sums, but is what existing
    /// result tables were produced with.
    #[default]
    Expanded,
    /// `sum(x^2)/n - mean^2`
    Reduced,
}

impl VarianceFormula {
    pub fn variance(self, n: f64, sum_x: f64, sum_x2: f64, mean: f64) -> f64 {
        match self {
            Self::Expanded => (sum_x2 - 2.0 * mean * sum_x + n * (mean * mean)) / n,
            Self::Reduced => sum_x2 / n - mean * mean,
        }
    }
}

pub fn derive_summary(
    record: &RawRecord<'_>,
    formula: VarianceFormula,
) -> Result<BenchmarkSummary, ResultsError> {
    let name = field(record, COL_NAME)?.to_string();
    let runs = hex_field(record, COL_RUNS)?;
    let sum = hex_field(record, COL_SUM)?;
    let sum_squared = hex_field(record, COL_SUM_SQUARED)?;
    let min = hex_field(record, COL_MIN)?;
    let max = hex_field(record, COL_MAX)?;

    if runs.is_zero() {
        return Err(ResultsError::ZeroRuns {
            row: record.row,
            name,
        });
    }

    let overflow = |quantity| ResultsError::FloatOverflow {
        row: record.row,
        name: name.clone(),
        quantity,
    };

    // One rounding step from the exact quotient, not two.
    let mean = finite(Ratio::new(sum.clone(), runs.clone()).to_f64())
        .ok_or_else(|| overflow("mean"))?;
    let n = finite(runs.to_f64()).ok_or_else(|| overflow("runs"))?;
    let sum_x = finite(sum.to_f64()).ok_or_else(|| overflow("sum"))?;
    let sum_x2 = finite(sum_squared.to_f64()).ok_or_else(|| overflow("sum_squared"))?;

    let variance = formula.variance(n, sum_x, sum_x2, mean);

    if variance.is_nan() || variance < 0.0 {
        return Err(ResultsError::NegativeVariance {
            row: record.row,
            name,
            variance,
        });
    }

    let stddev = variance.sqrt();

    tracing::debug!(
        row = record.row,
        name = %name,
        runs = %runs,
        mean,
        stddev,
        "derived benchmark statistics"
    );

    Ok(BenchmarkSummary {
        name,
        mean,
        stddev,
        min,
        max,
        runs,
        sum,
        sum_squared,
    })
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Derives every row of `table`, stopping at the first failure.
pub fn derive_all(
    table: &ResultsTable<'_>,
    formula: VarianceFormula,
) -> Result<Vec<BenchmarkSummary>, ResultsError> {
    table
        .records()
        .map(|record| derive_summary(&record?, formula))
        .collect()
}

fn field<'r>(record: &'r RawRecord<'_>, column: &'static str) -> Result<&'r str, ResultsError> {
    record
        .get(column)
        .ok_or(ResultsError::MissingColumn { column })
}

fn hex_field(record: &RawRecord<'_>, column: &'static str) -> Result<BigUint, ResultsError> {
    let value = field(record, column)?;

    parse_hex(value).map_err(|err| ResultsError::InvalidHex {
        row: record.row,
        column,
        value: value.to_string(),
        source: match err {
            HexError::Invalid(source) => Some(source),
            HexError::Empty | HexError::Signed => None,
        },
    })
}
