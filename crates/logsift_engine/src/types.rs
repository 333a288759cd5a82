use std::io;
use std::path::PathBuf;

use logsift_core::PatternError;

pub type RunId = u64;

/// How a run that returned a summary came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The whole input was scanned.
    Completed,
    /// The caller raised the cancellation token; the output written so far
    /// is a clean prefix of a full run.
    Cancelled,
}

/// What one extraction run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_scanned: u64,
    pub outcome: RunOutcome,
}

impl RunSummary {
    pub fn was_cancelled(&self) -> bool {
        self.outcome == RunOutcome::Cancelled
    }
}

/// Fatal conditions of one extraction run, reported once at the call
/// boundary. Cancellation is not among them; it is a [`RunOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("cannot open input {path:?}: {source}")]
    Input { path: PathBuf, source: io::Error },
    #[error("cannot create output {path:?}: {source}")]
    Output { path: PathBuf, source: io::Error },
    /// I/O failure once streaming had started. Output written before the
    /// failure stays on disk; there is no rollback.
    #[error("i/o failure after {lines_scanned} lines: {source}")]
    Stream { lines_scanned: u64, source: io::Error },
}

impl ExtractError {
    /// True when the failure was detected before any line was decided,
    /// i.e. no partial output can exist because of this run.
    pub fn before_streaming(&self) -> bool {
        !matches!(self, Self::Stream { .. })
    }

    /// Lines fully decided before the failure.
    pub fn lines_scanned(&self) -> u64 {
        match self {
            Self::Stream { lines_scanned, .. } => *lines_scanned,
            _ => 0,
        }
    }
}

/// Events emitted by background runs started through [`crate::EngineHandle`].
#[derive(Debug)]
pub enum EngineEvent {
    Progress {
        run_id: RunId,
        lines: u64,
        finished: bool,
    },
    RunCompleted {
        run_id: RunId,
        result: Result<RunSummary, ExtractError>,
    },
}
