use crate::results::error::ResultsError;

pub const RESULTS_BEGIN: &str = "__RESULTS_BEGIN__";
pub const RESULTS_END: &str = "__RESULTS_END__";

/// Marker tokens that fence the results block inside a larger log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelPair {
    pub begin: String,
    pub end: String,
}

impl Default for SentinelPair {
    fn default() -> Self {
        Self {
            begin: RESULTS_BEGIN.to_string(),
            end: RESULTS_END.to_string(),
        }
    }
}

/// Returns the trimmed text between the line holding `begin` and the start of `end`.
///
/// Both tokens must occur exactly once and `end` must start no earlier than the
/// line following `begin`.
pub fn extract_results<'a>(
    log: &'a str,
    sentinels: &SentinelPair,
) -> Result<&'a str, ResultsError> {
    let begin_at = find_unique(log, &sentinels.begin)?;
    let end_at = find_unique(log, &sentinels.end)?;

    let after_begin = begin_at + sentinels.begin.len();
    let block_start = log[after_begin..]
        .find('\n')
        .map(|nl| after_begin + nl + 1)
        .unwrap_or(log.len());

    if end_at < block_start {
        return Err(ResultsError::SentinelOrder {
            begin: sentinels.begin.clone(),
            end: sentinels.end.clone(),
        });
    }

    Ok(log[block_start..end_at].trim())
}

fn find_unique(log: &str, token: &str) -> Result<usize, ResultsError> {
    let mut hits = log.match_indices(token).map(|(idx, _)| idx);

    let Some(first) = hits.next() else {
        return Err(ResultsError::missing_sentinel(token));
    };

    let extra = hits.count();
    if extra > 0 {
        return Err(ResultsError::DuplicateSentinel {
            token: token.to_string(),
            count: extra + 1,
        });
    }

    Ok(first)
}
