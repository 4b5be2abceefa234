/*!
 * Rule Matcher
 * First-match selection of the governing folder rule for a directory
 *
 * Rules are tried in configuration order and the first one passing both the
 * pattern test and (for wildcards) the star-depth test wins. Two match modes:
 *
 * - Literal patterns use substring containment in either direction, so a
 *   short relative path can match inside a longer configured literal. This
 *   containment behavior is a load-bearing contract inherited from existing
 *   rule files, not an equality or prefix check.
 * - Wildcard patterns (`*` = any run, `?` = exactly one character) require an
 *   anchored, case-insensitive full match, optionally bounded by `star_depth`.
 */

use log::debug;

use crate::config::FolderRule;

/// Select the first rule matching `relative`, or None to leave the directory
/// untouched
///
/// `relative` is the directory path with the scan-root prefix stripped,
/// `/`-separated, retaining the leading separator.
#[must_use]
pub fn select<'a>(relative: &str, rules: &'a [FolderRule]) -> Option<&'a FolderRule> {
    for rule in rules {
        if rule.is_wildcard() {
            if !wildcard_match(&rule.pattern, relative) {
                continue;
            }
            if !within_star_depth(rule, relative) {
                debug!(
                    "Rule '{}' matched '{}' but exceeds star_depth {}",
                    rule.pattern, relative, rule.star_depth
                );
                continue;
            }
            return Some(rule);
        }

        if rule.pattern.contains(relative) || relative.contains(&rule.pattern) {
            return Some(rule);
        }
    }
    None
}

/// Star-depth budget: a wildcard may consume at most `star_depth` segments
/// beyond the pattern's own segment count
fn within_star_depth(rule: &FolderRule, relative: &str) -> bool {
    if rule.star_depth <= 0 {
        return true;
    }
    let max_allowed = separator_count(&rule.pattern) as i32 + rule.star_depth - 1;
    separator_count(relative) as i32 <= max_allowed
}

fn separator_count(s: &str) -> usize {
    s.chars().filter(|&c| c == '/').count()
}

/// Anchored, case-insensitive wildcard match
///
/// Constructive two-pointer glob with star backtracking; separators are
/// ordinary characters, so `*` may span path segments.
fn wildcard_match(pattern: &str, candidate: &str) -> bool {
    let p: Vec<char> = pattern.to_lowercase().chars().collect();
    let c: Vec<char> = candidate.to_lowercase().chars().collect();

    let (mut pi, mut ci) = (0, 0);
    let mut star: Option<usize> = None;
    let mut mark = 0;

    while ci < c.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == c[ci]) {
            pi += 1;
            ci += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some(pi);
            mark = ci;
            pi += 1;
        } else if let Some(s) = star {
            // Backtrack: let the last star absorb one more character
            pi = s + 1;
            mark += 1;
            ci = mark;
        } else {
            return false;
        }
    }

    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }
    pi == p.len()
}
