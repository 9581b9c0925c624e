use crate::config::SummaryConfig;
use crate::results::{
    OutputFormat, RESULTS_BEGIN, RESULTS_END, ResultsError, SentinelPair, VarianceFormula,
    derive_all, extract_results, load_log, parse_table, write_summaries,
};
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Path to the benchmark log
    pub logfile: PathBuf,

    /// Variance formula
    #[arg(long, value_enum, default_value_t = VarianceFormula::Expanded)]
    pub formula: VarianceFormula,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub output: OutputFormat,

    /// Token on the line preceding the results table
    #[arg(long, default_value = RESULTS_BEGIN)]
    pub begin_marker: String,

    /// Token following the results table
    #[arg(long, default_value = RESULTS_END)]
    pub end_marker: String,
}

impl SummarizeArgs {
    pub fn config(&self) -> SummaryConfig {
        SummaryConfig {
            sentinels: SentinelPair {
                begin: self.begin_marker.clone(),
                end: self.end_marker.clone(),
            },
            formula: self.formula,
            output: self.output,
        }
    }
}

pub fn run_summarize(args: &SummarizeArgs) -> Result<()> {
    let config = args.config();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    summarize_file(&args.logfile, &config, &mut out)
        .with_context(|| format!("failed to summarize {}", args.logfile.display()))?;

    Ok(())
}

pub fn summarize_file<W: Write>(
    path: &Path,
    config: &SummaryConfig,
    out: &mut W,
) -> Result<usize, ResultsError> {
    let log = load_log(path)?;
    summarize_log(&log, config, out)
}

/// Runs the whole pipeline over an in-memory log and returns the number of rows written.
///
/// Every row is derived before the first byte is written, so a failing row
/// leaves `out` untouched.
pub fn summarize_log<W: Write>(
    log: &str,
    config: &SummaryConfig,
    out: &mut W,
) -> Result<usize, ResultsError> {
    let block = extract_results(log, &config.sentinels)?;
    tracing::debug!(bytes = block.len(), "extracted results block");

    let table = parse_table(block)?;
    let summaries = derive_all(&table, config.formula)?;
    tracing::info!(
        rows = summaries.len(),
        formula = ?config.formula,
        "derived benchmark summaries"
    );

    write_summaries(out, &summaries, config.output)?;

    Ok(summaries.len())
}
