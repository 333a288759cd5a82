//! Logsift core: rule model and pure line-selection state machine.
mod matcher;
mod rules;
mod select;
mod window;

pub use matcher::{MatchMode, MatcherSet, PatternError};
pub use rules::{BlockRule, RuleSet, DEFAULT_AFTER};
pub use select::{LineSelector, LineVerdict};
pub use window::BlockWindows;
