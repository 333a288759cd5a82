//! Logsift engine: streaming extraction pipeline and run orchestration.
mod cancel;
mod config;
mod decode;
mod engine;
mod extract;
mod progress;
mod strip;
mod types;

pub use cancel::CancelToken;
pub use config::{load_rules, save_rules, ConfigError};
pub use decode::{decode_line, sniff_encoding};
pub use engine::{EngineHandle, ExtractRequest};
pub use extract::{extract_file, extract_lines, ExtractOptions, DEFAULT_REPORT_INTERVAL};
pub use progress::{ChannelProgressSink, NullProgressSink, ProgressSink};
pub use strip::TimestampStripper;
pub use types::{EngineEvent, ExtractError, RunId, RunOutcome, RunSummary};
