mod fixtures;
pub mod tracing;

pub use self::fixtures::{SummaryRun, fixture_path, summarize_fixture};
pub use self::tracing::{CapturedEvent, init_test_tracing};
