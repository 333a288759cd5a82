use std::sync::Once;

use logsift_core::{MatchMode, MatcherSet};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

#[test]
fn literal_mode_matches_substrings() {
    init_logging();
    let set = MatcherSet::compile(&patterns(&["WARN", "disk"]), MatchMode::Literal).unwrap();

    assert!(set.matches_any("2024-01-01 WARN something"));
    assert!(set.matches_any("low disk space"));
    assert!(!set.matches_any("all good"));
}

#[test]
fn literal_mode_treats_metacharacters_as_raw_text() {
    init_logging();
    let set = MatcherSet::compile(&patterns(&["a.b"]), MatchMode::Literal).unwrap();

    assert!(set.matches_any("path a.b found"));
    // `.` must not act as a wildcard in literal mode.
    assert!(!set.matches_any("path axb found"));
}

#[test]
fn pattern_mode_searches_anywhere_in_the_line() {
    init_logging();
    let set = MatcherSet::compile(&patterns(&[r"a.b", r"^start"]), MatchMode::Pattern).unwrap();

    assert!(set.matches_any("path axb found"));
    assert!(set.matches_any("start of line"));
    assert!(!set.matches_any("restart of line"));
}

#[test]
fn match_all_reports_every_matching_pattern() {
    init_logging();
    let set =
        MatcherSet::compile(&patterns(&["alpha", "beta", "alp"]), MatchMode::Literal).unwrap();
    let mut hits = Vec::new();

    set.match_all("alpha line", &mut hits);
    assert_eq!(hits, vec![0, 2]);

    set.match_all("beta line", &mut hits);
    assert_eq!(hits, vec![1]);

    set.match_all("nothing here", &mut hits);
    assert!(hits.is_empty());
}

#[test]
fn empty_set_matches_nothing() {
    init_logging();
    let set = MatcherSet::compile(&[], MatchMode::Literal).unwrap();

    assert!(set.is_empty());
    assert!(!set.matches_any("anything"));
}

#[test]
fn invalid_regex_is_a_compile_time_error_naming_the_pattern() {
    init_logging();
    let err = MatcherSet::compile(&patterns(&["ok", "(unclosed"]), MatchMode::Pattern)
        .expect_err("pattern should not compile");

    assert_eq!(err.pattern, "(unclosed");
    assert!(err.to_string().contains("(unclosed"));
}

#[test]
fn invalid_regex_is_fine_as_a_literal() {
    init_logging();
    let set = MatcherSet::compile(&patterns(&["(unclosed"]), MatchMode::Literal).unwrap();

    assert!(set.matches_any("saw (unclosed bracket"));
}
