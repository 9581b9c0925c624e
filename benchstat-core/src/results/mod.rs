//! Benchmark Results Pipeline
//!
//! Benchmark firmware prints its aggregates into a serial log, fenced by two
//! sentinel lines:
//!
//! ```text
//! manager: All benchmarks done
//! __RESULTS_BEGIN__
//! name,runs,sum,sum_squared,min,max
//! Signal low to Hi,0x0000000000000400,0x...,0x...,0x...,0x...
//! __RESULTS_END__
//! ```
//!
//! Every numeric column is base-16. This module turns that block into a table
//! of decimal integers with the mean and standard deviation appended.
//!
//! The overall data processing architecture is:
//!
//! load_log
//! extract_results
//! parse_table
//! RawRecord
//! derive_summary
//! BenchmarkSummary
//! write_summaries
//!

mod derive;
mod error;
mod extract;
mod hex;
mod render;
mod table;
mod types;

#[cfg(test)]
mod tests;

pub use derive::{VarianceFormula, derive_all, derive_summary};
pub use error::ResultsError;
pub use extract::{RESULTS_BEGIN, RESULTS_END, SentinelPair, extract_results};
pub use hex::{HexError, parse_hex};
pub use render::{OutputFormat, escape_field, format_float, render_csv, write_summaries};
pub use table::{ResultsTable, parse_table};
pub use types::{BenchmarkSummary, Header, OUTPUT_COLUMNS, RawRecord, REQUIRED_COLUMNS};

use std::fs;
use std::path::Path;

/// Reads the whole log into memory. The file is closed before this returns.
pub fn load_log(path: &Path) -> Result<String, ResultsError> {
    let log = fs::read_to_string(path).map_err(|e| ResultsError::read_log(path, e))?;

    tracing::info!(path = %path.display(), bytes = log.len(), "loaded log");

    Ok(log)
}
