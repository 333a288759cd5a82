use std::sync::mpsc;

use crate::{EngineEvent, RunId};

/// Receives line-count progress from a running extraction.
///
/// Called synchronously on the extraction thread at a bounded interval and
/// once more with `finished = true` at the end (or at cancellation).
/// Implementations must not block; a UI marshals the values to its own
/// rendering context itself.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, lines: u64, finished: bool);
}

/// Sink for callers that do not care about progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn emit(&self, _lines: u64, _finished: bool) {}
}

/// Forwards progress into an [`EngineEvent`] channel, tagged with the run id.
pub struct ChannelProgressSink {
    run_id: RunId,
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(run_id: RunId, tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { run_id, tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, lines: u64, finished: bool) {
        let _ = self.tx.send(EngineEvent::Progress {
            run_id: self.run_id,
            lines,
            finished,
        });
    }
}
