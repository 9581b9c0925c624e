use num_bigint::ParseBigIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultsError {
    // IO
    #[error("failed to read log file {path}")]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write results")]
    WriteOutput {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode results as JSON")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    // Sentinels
    #[error("sentinel '{token}' not found in log")]
    MissingSentinel { token: String },

    #[error("sentinel '{token}' occurs {count} times in log, expected exactly once")]
    DuplicateSentinel { token: String, count: usize },

    #[error("sentinel '{end}' does not follow the line containing '{begin}'")]
    SentinelOrder { begin: String, end: String },

    // Table format
    #[error("results header is missing column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("results header repeats column '{column}'")]
    DuplicateColumn { column: String },

    #[error("row {row}: expected {expected} fields, found {found}")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: unterminated quoted field")]
    UnterminatedQuote { row: usize },

    #[error("row {row}: column '{column}' is not a valid base-16 integer: '{value}'")]
    InvalidHex {
        row: usize,
        column: &'static str,
        value: String,
        #[source]
        source: Option<ParseBigIntError>,
    },

    // Arithmetic
    #[error("row {row}: benchmark '{name}' has a run count of zero")]
    ZeroRuns { row: usize, name: String },

    #[error("row {row}: benchmark '{name}' has negative variance {variance}")]
    NegativeVariance {
        row: usize,
        name: String,
        variance: f64,
    },

    #[error("row {row}: benchmark '{name}' {quantity} is too large for a float")]
    FloatOverflow {
        row: usize,
        name: String,
        quantity: &'static str,
    },
}

impl ResultsError {
    pub fn read_log(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadLog {
            path: path.into(),
            source,
        }
    }

    pub fn missing_sentinel(token: &str) -> Self {
        Self::MissingSentinel {
            token: token.to_string(),
        }
    }
}
