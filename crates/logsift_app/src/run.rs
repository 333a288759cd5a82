use std::process::ExitCode;

use engine_logging::{engine_info, engine_warn};
use logsift_core::RuleSet;
use logsift_engine::{extract_file, load_rules, CancelToken, ExtractOptions, ProgressSink};

use crate::cli::Cli;

/// Conventional exit status for a run stopped by Ctrl-C.
const EXIT_CANCELLED: u8 = 130;

/// Renders periodic progress through the logging facade. The final report is
/// skipped here; the completion message covers it.
struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn emit(&self, lines: u64, finished: bool) {
        if !finished {
            engine_info!("{} lines scanned...", lines);
        }
    }
}

pub fn run(cli: Cli) -> ExitCode {
    let rules = match build_rules(&cli) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("Failed: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    if rules.is_empty() {
        engine_warn!("no rules given; nothing will be extracted");
    }

    let options = ExtractOptions {
        separators: cli.separators,
        strip_timestamps: cli.strip_timestamps,
        ..Default::default()
    };

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        if let Err(err) = ctrlc::set_handler(move || cancel.cancel()) {
            engine_warn!("cannot install Ctrl-C handler: {}", err);
        }
    }

    match extract_file(
        &cli.input,
        cli.output.as_deref(),
        &rules,
        &options,
        &ConsoleProgress,
        &cancel,
    ) {
        Ok(summary) if summary.was_cancelled() => {
            eprintln!("Cancelled. {} lines scanned.", summary.lines_scanned);
            ExitCode::from(EXIT_CANCELLED)
        }
        Ok(summary) => {
            eprintln!("Done. {} lines scanned.", summary.lines_scanned);
            ExitCode::SUCCESS
        }
        Err(err) if err.before_streaming() => {
            eprintln!("Failed: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Failed after {} lines: {err}", err.lines_scanned());
            ExitCode::FAILURE
        }
    }
}

fn build_rules(cli: &Cli) -> anyhow::Result<RuleSet> {
    match &cli.config {
        Some(path) => Ok(load_rules(path)?),
        None => cli.inline_rules(),
    }
}
