use crate::results::error::ResultsError;
use crate::results::types::{BenchmarkSummary, OUTPUT_COLUMNS};
use clap::ValueEnum;
use std::borrow::Cow;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma separated table with a header row
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
}

pub fn write_summaries<W: Write>(
    out: &mut W,
    summaries: &[BenchmarkSummary],
    format: OutputFormat,
) -> Result<(), ResultsError> {
    match format {
        OutputFormat::Csv => write_csv(out, summaries),
        OutputFormat::Json => write_json(out, summaries),
    }
}

pub fn render_csv(summaries: &[BenchmarkSummary]) -> String {
    let mut out = String::new();

    out.push_str(&OUTPUT_COLUMNS.join(","));
    out.push('\n');

    for s in summaries {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            escape_field(&s.name),
            format_float(s.mean),
            format_float(s.stddev),
            s.min,
            s.max,
            s.runs,
            s.sum,
            s.sum_squared
        ));
    }

    out
}

fn write_csv<W: Write>(out: &mut W, summaries: &[BenchmarkSummary]) -> Result<(), ResultsError> {
    out.write_all(render_csv(summaries).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|source| ResultsError::WriteOutput { source })
}

fn write_json<W: Write>(out: &mut W, summaries: &[BenchmarkSummary]) -> Result<(), ResultsError> {
    serde_json::to_writer_pretty(&mut *out, summaries)
        .map_err(|source| ResultsError::Json { source })?;

    writeln!(out)
        .and_then(|_| out.flush())
        .map_err(|source| ResultsError::WriteOutput { source })
}

/// Shortest round-trip form of `value`.
///
/// Whole numbers keep a trailing `.0`. Magnitudes of `1e16` and above, or below
/// `1e-4`, use a signed two-digit exponent such as `1e+16` or `1.5e-05`.
pub fn format_float(value: f64) -> String {
    let repr = format!("{value:?}");

    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Quotes a text field when it would otherwise break the row.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
