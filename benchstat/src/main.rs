use benchstat_core::cli::{SummarizeArgs, run_summarize};
use benchstat_core::logging::{LogFormat, default_log_format, init_logging};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "benchstat",
    version,
    about = "Benchstat: derive mean and standard deviation from benchmark result logs"
)]
struct Cli {
    #[command(flatten)]
    summarize: SummarizeArgs,

    /// Diagnostic log format on stderr (default: pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = run_summarize(&cli.summarize) {
        tracing::debug!(error = ?e, "summarize failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
