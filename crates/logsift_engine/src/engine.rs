use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use engine_logging::{engine_warn, set_run_id};
use logsift_core::RuleSet;

use crate::extract::{extract_file, ExtractOptions};
use crate::progress::ChannelProgressSink;
use crate::{CancelToken, EngineEvent, RunId};

/// Everything needed to start one extraction run on a worker thread.
///
/// The caller keeps a clone of `cancel` to stop the run early.
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub rules: RuleSet,
    pub options: ExtractOptions,
    pub cancel: CancelToken,
}

enum EngineCommand {
    Enqueue { run_id: RunId, request: ExtractRequest },
}

/// Handle to the background extraction dispatcher.
///
/// Each enqueued run streams on its own worker thread; independent runs may
/// execute concurrently, possibly sharing an immutable rule set. Front-ends
/// drain [`EngineEvent`]s and marshal them to their own rendering context.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let event_tx = event_tx.clone();
                thread::spawn(move || handle_command(command, event_tx));
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn enqueue(&self, run_id: RunId, request: ExtractRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Enqueue { run_id, request });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

impl Default for EngineHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn handle_command(command: EngineCommand, event_tx: mpsc::Sender<EngineEvent>) {
    match command {
        EngineCommand::Enqueue { run_id, request } => {
            set_run_id(run_id);
            let sink = ChannelProgressSink::new(run_id, event_tx.clone());
            let result = extract_file(
                &request.input,
                request.output.as_deref(),
                &request.rules,
                &request.options,
                &sink,
                &request.cancel,
            );
            if let Err(err) = &result {
                engine_warn!("run {} failed: {}", run_id, err);
            }
            let _ = event_tx.send(EngineEvent::RunCompleted { run_id, result });
        }
    }
}
