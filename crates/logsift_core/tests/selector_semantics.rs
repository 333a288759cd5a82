use std::sync::Once;

use logsift_core::{BlockRule, LineSelector, LineVerdict, MatchMode, RuleSet};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn rules(include: &[&str], blocks: &[(&str, u32)], mode: MatchMode) -> RuleSet {
    RuleSet {
        include: include.iter().map(|p| p.to_string()).collect(),
        blocks: blocks
            .iter()
            .map(|(trigger, after)| BlockRule::new(*trigger, *after))
            .collect(),
        mode,
    }
}

fn kept_lines(rules: &RuleSet, input: &[&str]) -> Vec<String> {
    let mut selector = LineSelector::new(rules).unwrap();
    input
        .iter()
        .filter(|line| selector.classify(line).is_keep())
        .map(|line| line.to_string())
        .collect()
}

#[test]
fn block_rule_keeps_trigger_plus_window() {
    init_logging();
    let rules = rules(&[], &[("TRIGGER", 2)], MatchMode::Literal);
    let kept = kept_lines(&rules, &["A", "TRIGGER", "x", "y", "z", "B"]);

    assert_eq!(kept, vec!["TRIGGER", "x", "y"]);
}

#[test]
fn include_pattern_adds_matching_lines() {
    init_logging();
    let rules = rules(&["A"], &[("TRIGGER", 2)], MatchMode::Literal);
    let kept = kept_lines(&rules, &["A", "TRIGGER", "x", "y", "z", "B"]);

    assert_eq!(kept, vec!["A", "TRIGGER", "x", "y"]);
}

#[test]
fn include_match_wins_regardless_of_block_state() {
    init_logging();
    let rules = rules(&["keep me"], &[("TRIG", 1)], MatchMode::Literal);
    let kept = kept_lines(&rules, &["noise", "keep me", "TRIG", "tail", "noise", "keep me"]);

    assert_eq!(kept, vec!["keep me", "TRIG", "tail", "keep me"]);
}

#[test]
fn retrigger_extends_never_shortens() {
    init_logging();
    let rules = rules(&[], &[("T", 1)], MatchMode::Literal);
    let kept = kept_lines(&rules, &["T", "T", "z", "w"]);

    // The second T re-arms the window before it expires; coverage runs
    // through z only.
    assert_eq!(kept, vec!["T", "T", "z"]);
}

#[test]
fn overlapping_rules_decay_independently() {
    init_logging();
    let rules = rules(&[], &[("ALPHA", 1), ("BRAVO", 3)], MatchMode::Literal);
    let input = &["ALPHA", "BRAVO", "1", "2", "3", "4"];
    let kept = kept_lines(&rules, input);

    // ALPHA owes one line but BRAVO (a trigger line itself) does not consume
    // it; BRAVO then owes three more. "4" is past both windows.
    assert_eq!(kept, vec!["ALPHA", "BRAVO", "1", "2", "3"]);
}

#[test]
fn line_matching_two_triggers_reports_both() {
    init_logging();
    let rules = rules(&[], &[("ERROR", 0), ("ERR", 2)], MatchMode::Literal);
    let mut selector = LineSelector::new(&rules).unwrap();

    assert_eq!(
        selector.classify("ERROR: boom"),
        LineVerdict::Trigger { rules_matched: 2 }
    );
    // Only the second rule still owes lines.
    assert_eq!(selector.classify("tail 1"), LineVerdict::Keep);
    assert_eq!(selector.classify("tail 2"), LineVerdict::Keep);
    assert_eq!(selector.classify("tail 3"), LineVerdict::Skip);
}

#[test]
fn no_rules_keeps_nothing() {
    init_logging();
    let rules = rules(&[], &[], MatchMode::Literal);
    let kept = kept_lines(&rules, &["a", "b", "c"]);

    assert!(kept.is_empty());
    assert!(rules.is_empty());
}

#[test]
fn pattern_mode_applies_to_includes_and_triggers_alike() {
    init_logging();
    let rules = rules(&[r"^WARN"], &[(r"panic(ked)?", 1)], MatchMode::Pattern);
    let kept = kept_lines(
        &rules,
        &["WARN low", "noise WARN", "panicked at main", "tail", "done"],
    );

    assert_eq!(kept, vec!["WARN low", "panicked at main", "tail"]);
}

#[test]
fn fresh_selectors_are_independent() {
    init_logging();
    let rules = rules(&[], &[("T", 5)], MatchMode::Literal);

    let mut first = LineSelector::new(&rules).unwrap();
    assert_eq!(
        first.classify("T"),
        LineVerdict::Trigger { rules_matched: 1 }
    );

    // A second selector starts idle; state never leaks between runs.
    let mut second = LineSelector::new(&rules).unwrap();
    assert_eq!(second.classify("plain"), LineVerdict::Skip);
}
