/*!
 * Rule Matcher Integration Tests
 * Wildcard depth budgets, containment quirks, and matcher properties
 */

use aclsweep::{select, FolderRule};
use proptest::prelude::*;

fn rule(pattern: &str, star_depth: i32, permission: &str) -> FolderRule {
    FolderRule {
        pattern: pattern.to_string(),
        star_depth,
        permission: permission.to_string(),
    }
}

#[test]
fn test_star_depth_ladder() {
    // seps("/a/*") = 2: star_depth=1 admits seps <= 2, =2 admits seps <= 3
    let cases = [
        (1, "/a/b", true),
        (1, "/a/b/c", false),
        (2, "/a/b/c", true),
        (2, "/a/b/c/d", false),
        (-1, "/a/b/c/d/e/f", true),
        (0, "/a/b/c/d/e/f", true),
    ];
    for (star_depth, relative, expect) in cases {
        let rules = vec![rule("/a/*", star_depth, "p")];
        assert_eq!(
            select(relative, &rules).is_some(),
            expect,
            "star_depth={star_depth} relative={relative}"
        );
    }
}

#[test]
fn test_first_match_wins_across_modes() {
    let rules = vec![
        rule("/app/logs", -1, "literal_first"),
        rule("/app/*", -1, "wildcard_second"),
    ];
    assert_eq!(select("/app/logs", &rules).unwrap().permission, "literal_first");

    let rules = vec![
        rule("/app/*", -1, "wildcard_first"),
        rule("/app/logs", -1, "literal_second"),
    ];
    assert_eq!(select("/app/logs", &rules).unwrap().permission, "wildcard_first");
}

#[test]
fn test_depth_rejection_is_transparent() {
    // A wildcard rule rejected on depth must not shadow later rules
    let rules = vec![
        rule("/a/*", 1, "tight"),
        rule("/a/*", -1, "loose"),
    ];
    assert_eq!(select("/a/b", &rules).unwrap().permission, "tight");
    assert_eq!(select("/a/b/c", &rules).unwrap().permission, "loose");
}

#[test]
fn test_literal_containment_quirk() {
    // The containment check runs in both directions: a configured literal
    // longer than the candidate still matches when it contains the candidate
    let rules = vec![rule("/build/output/cache", -1, "p")];
    assert!(select("/build/output", &rules).is_some());
    assert!(select("/output/cache", &rules).is_some());
    assert!(select("/elsewhere", &rules).is_none());
}

#[test]
fn test_scenario_logs_tree() {
    // Priority 1: wildcard bounded to one extra segment under /app
    // Priority 2: catch-all literal
    let rules = vec![
        rule("/app/*", 1, "read_only"),
        rule("", -1, "default"),
    ];

    assert_eq!(select("/app/logs", &rules).unwrap().permission, "read_only");
    // Depth exceeds the budget, falls through to the catch-all
    assert_eq!(select("/app/logs/old", &rules).unwrap().permission, "default");
    assert_eq!(select("/", &rules).unwrap().permission, "default");
}

const SEGMENTS: &[&str] = &["app", "logs", "data", "old", "srv", "x9"];

/// Paths assembled from sampled segments, `/`-separated with leading separator
fn path_strategy(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SEGMENTS), min..=max)
        .prop_map(|parts| parts.iter().map(|s| format!("/{s}")).collect())
}

proptest! {
    /// A wildcard pattern equal to the candidate always full-matches
    #[test]
    fn prop_exact_pattern_matches_itself(path in path_strategy(1, 5)) {
        // Force the wildcard branch by swapping the last character for '?'
        let mut pattern = path.clone();
        pattern.pop();
        pattern.push('?');
        let wild = vec![rule(&pattern, -1, "p")];
        prop_assert!(select(&path, &wild).is_some(), "pattern {} vs {}", pattern, path);
    }

    /// Star depth never admits more separators than its budget allows
    #[test]
    fn prop_star_depth_bound(extra in 1usize..5, star_depth in 1i32..4) {
        let mut relative = "/base".to_string();
        for i in 0..extra {
            relative.push_str(&format!("/d{i}"));
        }
        let rules = vec![rule("/base/*", star_depth, "p")];
        let seps = relative.chars().filter(|&ch| ch == '/').count() as i32;
        let max_allowed = 2 + star_depth - 1;
        prop_assert_eq!(select(&relative, &rules).is_some(), seps <= max_allowed);
    }

    /// Literal selection is symmetric containment, never more
    #[test]
    fn prop_literal_matches_iff_contained(
        pattern in path_strategy(0, 3),
        relative in path_strategy(1, 3),
    ) {
        let rules = vec![rule(&pattern, -1, "p")];
        let expect = pattern.contains(&relative) || relative.contains(&pattern);
        prop_assert_eq!(select(&relative, &rules).is_some(), expect);
    }
}
