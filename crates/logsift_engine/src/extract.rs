use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use engine_logging::{engine_debug, engine_info};
use logsift_core::{LineSelector, LineVerdict, RuleSet};

use crate::decode::{decode_line, sniff_encoding};
use crate::strip::TimestampStripper;
use crate::{CancelToken, ExtractError, ProgressSink, RunOutcome, RunSummary};

/// Lines between two progress reports, unless overridden.
pub const DEFAULT_REPORT_INTERVAL: u64 = 5_000;

/// Knobs for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Announce every block trigger with a marker line in the output.
    pub separators: bool,
    /// Remove leading bracketed timestamp groups before matching.
    pub strip_timestamps: bool,
    /// Lines between progress reports; 0 disables periodic reports (the
    /// final report is always sent).
    pub report_interval: u64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            separators: false,
            strip_timestamps: false,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

/// Streams `reader` through the rule set, writing kept lines to `writer`.
///
/// Single pass; per-line work is bounded by the number of rules, and nothing
/// is buffered beyond one line. The cancellation token is polled once per
/// line boundary, so the output is always a clean prefix of what a full run
/// would have produced. Kept lines are written verbatim, including their
/// original terminator.
pub fn extract_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    rules: &RuleSet,
    options: &ExtractOptions,
    progress: &dyn ProgressSink,
    cancel: &CancelToken,
) -> Result<RunSummary, ExtractError> {
    let mut selector = LineSelector::new(rules)?;
    let stripper = options.strip_timestamps.then(TimestampStripper::new);

    let (encoding, bom_len) = {
        let head = reader.fill_buf().map_err(|source| stream_error(0, source))?;
        sniff_encoding(head)
    };
    reader.consume(bom_len);
    engine_debug!("input decoded as {}", encoding.name());

    let mut raw = Vec::new();
    let mut lines: u64 = 0;
    let outcome = loop {
        if cancel.is_cancelled() {
            break RunOutcome::Cancelled;
        }

        raw.clear();
        let read = reader
            .read_until(b'\n', &mut raw)
            .map_err(|source| stream_error(lines, source))?;
        if read == 0 {
            break RunOutcome::Completed;
        }
        lines += 1;

        let text = decode_line(encoding, &raw);
        let (content, terminator) = split_terminator(&text);
        let content: Cow<'_, str> = match &stripper {
            Some(stripper) => stripper.apply(content),
            None => Cow::Borrowed(content),
        };

        match selector.classify(&content) {
            LineVerdict::Skip => {}
            LineVerdict::Keep => {
                write_line(&mut writer, &content, terminator)
                    .map_err(|source| stream_error(lines, source))?;
            }
            LineVerdict::Trigger { rules_matched } => {
                if options.separators {
                    write_separator(&mut writer, lines, rules_matched)
                        .map_err(|source| stream_error(lines, source))?;
                }
                write_line(&mut writer, &content, terminator)
                    .map_err(|source| stream_error(lines, source))?;
            }
        }

        if options.report_interval > 0 && lines % options.report_interval == 0 {
            progress.emit(lines, false);
        }
    };

    writer
        .flush()
        .map_err(|source| stream_error(lines, source))?;
    progress.emit(lines, true);

    Ok(RunSummary {
        lines_scanned: lines,
        outcome,
    })
}

/// Opens `input`, streams it through the rules, and writes kept lines to
/// `output`, or to standard output when `output` is `None`.
///
/// Open failures are fatal before anything else happens: the input before
/// any callback is invoked, the output before any line is read.
pub fn extract_file(
    input: &Path,
    output: Option<&Path>,
    rules: &RuleSet,
    options: &ExtractOptions,
    progress: &dyn ProgressSink,
    cancel: &CancelToken,
) -> Result<RunSummary, ExtractError> {
    let file = File::open(input).map_err(|source| ExtractError::Input {
        path: input.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let summary = match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| ExtractError::Output {
                path: path.to_path_buf(),
                source,
            })?;
            extract_lines(reader, BufWriter::new(file), rules, options, progress, cancel)?
        }
        None => {
            let stdout = io::stdout();
            extract_lines(reader, stdout.lock(), rules, options, progress, cancel)?
        }
    };

    engine_info!(
        "extraction of {:?} finished: {} lines scanned, {:?}",
        input,
        summary.lines_scanned,
        summary.outcome
    );
    Ok(summary)
}

fn write_separator<W: Write>(
    writer: &mut W,
    line_number: u64,
    rules_matched: usize,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "----- BLOCK TRIGGER @ line {line_number} (matched {rules_matched} rule(s)) -----"
    )
}

fn write_line<W: Write>(writer: &mut W, content: &str, terminator: &str) -> io::Result<()> {
    writer.write_all(content.as_bytes())?;
    writer.write_all(terminator.as_bytes())
}

fn split_terminator(text: &str) -> (&str, &str) {
    if let Some(content) = text.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = text.strip_suffix('\n') {
        (content, "\n")
    } else {
        (text, "")
    }
}

fn stream_error(lines_scanned: u64, source: io::Error) -> ExtractError {
    ExtractError::Stream {
        lines_scanned,
        source,
    }
}
