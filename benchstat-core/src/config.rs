use crate::results::{OutputFormat, SentinelPair, VarianceFormula};

/// Everything that shapes one summarize run, built from the command line by
/// `SummarizeArgs::config`. The defaults reproduce the historical output exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryConfig {
    pub sentinels: SentinelPair,
    pub formula: VarianceFormula,
    pub output: OutputFormat,
}
