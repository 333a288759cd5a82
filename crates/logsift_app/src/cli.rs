use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use logsift_core::{BlockRule, MatchMode, RuleSet, DEFAULT_AFTER};

/// Extract relevant lines from large, line-oriented log files.
#[derive(Debug, Parser)]
#[command(name = "logsift", version, about)]
pub struct Cli {
    /// Log file to read.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write kept lines; standard output when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep every line matching this pattern. Repeatable.
    #[arg(long = "include", value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Block rule `TRIGGER` or `TRIGGER::N`: keep the matching line plus the
    /// next N lines. Repeatable.
    #[arg(long = "block", value_name = "TRIGGER[::N]")]
    pub block: Vec<String>,

    /// Window length for --block rules without an explicit ::N.
    #[arg(short = 'n', long, default_value_t = DEFAULT_AFTER)]
    pub after: u32,

    /// Treat patterns as regular expressions instead of substrings.
    #[arg(long)]
    pub regex: bool,

    /// Announce every block trigger with a marker line in the output.
    #[arg(long)]
    pub separators: bool,

    /// Remove leading bracketed timestamps from lines before matching.
    #[arg(long)]
    pub strip_timestamps: bool,

    /// Load the rule set from a JSON document, overriding --include, --block
    /// and --regex.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Rules as given inline on the command line (ignores --config).
    pub fn inline_rules(&self) -> anyhow::Result<RuleSet> {
        let blocks = self
            .block
            .iter()
            .map(|spec| parse_block_spec(spec, self.after))
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(RuleSet {
            include: self.include.clone(),
            blocks,
            mode: if self.regex {
                MatchMode::Pattern
            } else {
                MatchMode::Literal
            },
        })
    }
}

/// Parses `TRIGGER` or `TRIGGER::N`; a bare trigger takes the run-wide
/// default window length.
pub fn parse_block_spec(spec: &str, default_after: u32) -> anyhow::Result<BlockRule> {
    match spec.rsplit_once("::") {
        Some((trigger, count)) => {
            let after = count
                .trim()
                .parse()
                .with_context(|| format!("bad window length in block spec `{spec}`"))?;
            Ok(BlockRule::new(trigger.trim(), after))
        }
        None => Ok(BlockRule::new(spec.trim(), default_after)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_trigger_takes_the_default_window() {
        let rule = parse_block_spec("panic", 100).unwrap();
        assert_eq!(rule, BlockRule::new("panic", 100));
    }

    #[test]
    fn double_colon_overrides_the_window() {
        let rule = parse_block_spec("panic::25", 100).unwrap();
        assert_eq!(rule, BlockRule::new("panic", 25));
    }

    #[test]
    fn only_the_last_separator_counts() {
        // Triggers may themselves contain `::`.
        let rule = parse_block_spec("core::panic::7", 100).unwrap();
        assert_eq!(rule, BlockRule::new("core::panic", 7));
    }

    #[test]
    fn garbage_window_length_is_rejected() {
        let err = parse_block_spec("panic::soon", 100).unwrap_err();
        assert!(err.to_string().contains("panic::soon"));
    }

    #[test]
    fn inline_rules_collect_all_flags() {
        let cli = Cli::parse_from([
            "logsift",
            "--input",
            "in.log",
            "--include",
            "WARN",
            "--block",
            "panic::3",
            "--block",
            "abort",
            "-n",
            "10",
            "--regex",
        ]);
        let rules = cli.inline_rules().unwrap();

        assert_eq!(rules.mode, MatchMode::Pattern);
        assert_eq!(rules.include, vec!["WARN".to_string()]);
        assert_eq!(
            rules.blocks,
            vec![BlockRule::new("panic", 3), BlockRule::new("abort", 10)]
        );
    }
}
