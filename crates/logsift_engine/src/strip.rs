use std::borrow::Cow;

use regex::Regex;

/// Removes leading bracketed timestamp/id groups from a line, e.g.
/// `[2026.02.16-09.21.45:449][566] LogTemp: ...` becomes `LogTemp: ...`.
///
/// Pure per-line transform; the caller keeps the line terminator aside.
#[derive(Debug, Clone)]
pub struct TimestampStripper {
    leading: Regex,
}

impl TimestampStripper {
    pub fn new() -> Self {
        // One or more `[ ... ]` groups at the start of the line, including
        // any whitespace that follows each group.
        let leading = Regex::new(r"^(?:\[[^\]]*\]\s*)+").expect("fixed pattern compiles");
        Self { leading }
    }

    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.leading.replace(line, "")
    }
}

impl Default for TimestampStripper {
    fn default() -> Self {
        Self::new()
    }
}
