use regex::Regex;
use thiserror::Error;

/// How pattern strings are interpreted, fixed once per rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Contiguous substring containment, no escaping or anchoring.
    #[default]
    Literal,
    /// Regular-expression search anywhere in the line.
    Pattern,
}

/// A pattern that failed to compile as a regular expression.
///
/// Raised at rule-set construction time, before any input is consumed.
#[derive(Debug, Error)]
#[error("invalid pattern `{pattern}`: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Compiled matching strategy for one group of patterns.
///
/// The variant is chosen once from [`MatchMode`], keeping the per-line path
/// free of mode checks.
#[derive(Debug, Clone)]
pub enum MatcherSet {
    Literal(Vec<String>),
    Pattern(Vec<Regex>),
}

impl MatcherSet {
    pub fn compile(patterns: &[String], mode: MatchMode) -> Result<Self, PatternError> {
        match mode {
            MatchMode::Literal => Ok(Self::Literal(patterns.to_vec())),
            MatchMode::Pattern => {
                let mut compiled = Vec::with_capacity(patterns.len());
                for pattern in patterns {
                    let regex = Regex::new(pattern).map_err(|source| PatternError {
                        pattern: pattern.clone(),
                        source,
                    })?;
                    compiled.push(regex);
                }
                Ok(Self::Pattern(compiled))
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Literal(patterns) => patterns.len(),
            Self::Pattern(patterns) => patterns.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when at least one pattern matches the line.
    pub fn matches_any(&self, line: &str) -> bool {
        match self {
            Self::Literal(patterns) => patterns.iter().any(|p| line.contains(p.as_str())),
            Self::Pattern(patterns) => patterns.iter().any(|r| r.is_match(line)),
        }
    }

    /// Collects the index of every matching pattern into `hits`.
    ///
    /// All matches are reported, not just the first: a single line can
    /// satisfy several block triggers at once.
    pub fn match_all(&self, line: &str, hits: &mut Vec<usize>) {
        hits.clear();
        match self {
            Self::Literal(patterns) => {
                for (idx, pattern) in patterns.iter().enumerate() {
                    if line.contains(pattern.as_str()) {
                        hits.push(idx);
                    }
                }
            }
            Self::Pattern(patterns) => {
                for (idx, regex) in patterns.iter().enumerate() {
                    if regex.is_match(line) {
                        hits.push(idx);
                    }
                }
            }
        }
    }
}
