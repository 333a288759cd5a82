use crate::matcher::{MatcherSet, PatternError};
use crate::rules::RuleSet;
use crate::window::BlockWindows;

/// Outcome of judging a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    /// Not selected.
    Skip,
    /// Selected by an include pattern or an open block window.
    Keep,
    /// Selected because one or more block triggers fired on this line.
    Trigger { rules_matched: usize },
}

impl LineVerdict {
    pub fn is_keep(&self) -> bool {
        !matches!(self, LineVerdict::Skip)
    }
}

/// Per-run selection state: compiled matchers plus countdown windows.
///
/// Built fresh for every extraction call and fed one line at a time, in
/// order. Never share one selector across concurrent runs.
#[derive(Debug)]
pub struct LineSelector {
    include: MatcherSet,
    triggers: MatcherSet,
    after: Vec<u32>,
    windows: BlockWindows,
    hits: Vec<usize>,
}

impl LineSelector {
    /// Compiles all patterns up front; an invalid regular expression is
    /// reported here, never from the per-line path.
    pub fn new(rules: &RuleSet) -> Result<Self, PatternError> {
        let include = MatcherSet::compile(&rules.include, rules.mode)?;
        let trigger_patterns: Vec<String> =
            rules.blocks.iter().map(|b| b.trigger.clone()).collect();
        let triggers = MatcherSet::compile(&trigger_patterns, rules.mode)?;
        let after: Vec<u32> = rules.blocks.iter().map(|b| b.after).collect();
        let windows = BlockWindows::new(rules.blocks.len());

        Ok(Self {
            include,
            triggers,
            after,
            windows,
            hits: Vec::new(),
        })
    }

    /// Decides one line. O(number of rules); no re-scans of earlier input.
    pub fn classify(&mut self, line: &str) -> LineVerdict {
        let mut keep = !self.include.is_empty() && self.include.matches_any(line);

        if !self.triggers.is_empty() {
            self.triggers.match_all(line, &mut self.hits);
            if !self.hits.is_empty() {
                for &idx in &self.hits {
                    self.windows.arm(idx, self.after[idx]);
                }
                // A trigger line never consumes window budget.
                return LineVerdict::Trigger {
                    rules_matched: self.hits.len(),
                };
            }
            if self.windows.any_open() {
                keep = true;
                self.windows.decay();
            }
        }

        if keep {
            LineVerdict::Keep
        } else {
            LineVerdict::Skip
        }
    }
}
