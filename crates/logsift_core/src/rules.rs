use crate::matcher::MatchMode;

/// Window length used for block rules that do not carry their own.
pub const DEFAULT_AFTER: u32 = 100;

/// "On trigger match, keep that line and the next `after` lines."
///
/// Rules are independent of each other; their windows may overlap freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRule {
    pub trigger: String,
    pub after: u32,
}

impl BlockRule {
    pub fn new(trigger: impl Into<String>, after: u32) -> Self {
        Self {
            trigger: trigger.into(),
            after,
        }
    }
}

/// Immutable description of what to extract, built once per run.
///
/// `mode` applies uniformly to the include patterns and every block trigger.
/// The order of `include` and `blocks` does not affect the output; it only
/// matters for user-facing rule identity (display, editing).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    pub include: Vec<String>,
    pub blocks: Vec<BlockRule>,
    pub mode: MatchMode,
}

impl RuleSet {
    /// True when the set holds no rules at all; such a run keeps nothing.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.blocks.is_empty()
    }
}
