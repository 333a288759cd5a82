use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use logsift_core::{BlockRule, MatchMode, RuleSet, DEFAULT_AFTER};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read rules file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("malformed rules file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot encode rules for {path:?}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot write rules file {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// On-disk rule document. The field names are the stable exchange format
/// shared by every front-end that edits rule sets.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct RulesDoc {
    #[serde(default)]
    regex: bool,
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    blocks: Vec<BlockDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BlockDoc {
    trigger: String,
    #[serde(default = "default_after")]
    after: u32,
}

fn default_after() -> u32 {
    DEFAULT_AFTER
}

/// Loads a rule set from a JSON document.
///
/// Missing `include`/`blocks` default to empty, a missing `after` to
/// [`DEFAULT_AFTER`]. A malformed document is a configuration error,
/// distinct from anything that can happen once streaming starts.
pub fn load_rules(path: &Path) -> Result<RuleSet, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: RulesDoc = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(RuleSet {
        include: doc.include,
        blocks: doc
            .blocks
            .into_iter()
            .map(|b| BlockRule::new(b.trigger, b.after))
            .collect(),
        mode: if doc.regex {
            MatchMode::Pattern
        } else {
            MatchMode::Literal
        },
    })
}

/// Saves a rule set as pretty JSON, atomically: the document is written to a
/// temp file next to the target and renamed into place.
pub fn save_rules(path: &Path, rules: &RuleSet) -> Result<(), ConfigError> {
    let doc = RulesDoc {
        regex: rules.mode == MatchMode::Pattern,
        include: rules.include.clone(),
        blocks: rules
            .blocks
            .iter()
            .map(|b| BlockDoc {
                trigger: b.trigger.clone(),
                after: b.after,
            })
            .collect(),
    };
    let text = serde_json::to_string_pretty(&doc).map_err(|source| ConfigError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let write_error = |source: io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(text.as_bytes()).map_err(write_error)?;
    tmp.write_all(b"\n").map_err(write_error)?;
    tmp.flush().map_err(write_error)?;
    tmp.persist(path).map_err(|err| write_error(err.error))?;
    Ok(())
}
