use benchstat_core::cli::summarize_file;
use benchstat_core::config::SummaryConfig;
use benchstat_core::results::ResultsError;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Outcome of summarizing one fixture into memory.
pub struct SummaryRun {
    pub result: Result<usize, ResultsError>,
    pub stdout: String,
}

pub fn summarize_fixture(file: &str, config: &SummaryConfig) -> SummaryRun {
    let mut out = Vec::new();
    let result = summarize_file(&fixture_path(file), config, &mut out);

    SummaryRun {
        result,
        stdout: String::from_utf8(out).expect("summary output is not UTF-8"),
    }
}
