/// Countdown windows for block rules, one slot per rule.
///
/// A slot is `idle` at 0 and `active` while above 0. Windows from different
/// rules decay independently; a line is owed to the output as long as any
/// slot is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockWindows {
    remaining: Vec<u32>,
}

impl BlockWindows {
    pub fn new(rule_count: usize) -> Self {
        Self {
            remaining: vec![0; rule_count],
        }
    }

    /// Opens (or extends) the window for rule `idx`.
    ///
    /// A re-trigger never shortens an open window: the new length is the
    /// maximum of the remaining count and `after`.
    pub fn arm(&mut self, idx: usize, after: u32) {
        let slot = &mut self.remaining[idx];
        *slot = (*slot).max(after);
    }

    /// Consumes one line from every window, uniformly. Idle slots stay at 0.
    pub fn decay(&mut self) {
        for slot in &mut self.remaining {
            *slot = slot.saturating_sub(1);
        }
    }

    pub fn any_open(&self) -> bool {
        self.remaining.iter().any(|&slot| slot > 0)
    }

    pub fn remaining(&self, idx: usize) -> u32 {
        self.remaining[idx]
    }
}
