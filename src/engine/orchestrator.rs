/*!
 * Orchestrator
 * Composes walker, matcher, and applier into one traversal run
 *
 * Strictly sequential: one directory at a time, in walker order. A failing
 * apply is recorded in the report and the run moves on; nothing already
 * applied is rolled back.
 */

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::{debug, info, warn};
use path_clean::PathClean;

use super::applier::apply;
use super::matcher::select;
use super::report::{DirOutcome, MatchedRule, Outcome, RunReport};
use super::walker::DirWalker;
use crate::acl::AclProvider;
use crate::config::Config;

/// Traversal run driver
///
/// Borrows the config and provider for the duration of a run; neither is
/// mutated.
pub struct Orchestrator<'a> {
    config: &'a Config,
    provider: &'a dyn AclProvider,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator over a validated config and a provider
    #[must_use]
    pub fn new(config: &'a Config, provider: &'a dyn AclProvider) -> Self {
        Self { config, provider }
    }

    /// Walk `root` and apply the governing permission set to each directory
    pub fn run(&self, root: &Path) -> RunReport {
        let root = root.to_path_buf().clean();
        let started_at = SystemTime::now();
        info!(
            "Starting run over {} ({} rules, provider '{}')",
            root.display(),
            self.config.folder_rules.len(),
            self.provider.name()
        );

        let mut outcomes = Vec::new();
        for dir in DirWalker::new(self.config.max_scan_depth).enumerate(&root) {
            let relative = relative_of(&root, &dir);
            outcomes.push(self.process(&dir, &relative));
        }

        let report = RunReport {
            root,
            started_at,
            finished_at: SystemTime::now(),
            outcomes,
        };
        info!(
            "Run finished: {} applied, {} skipped, {} failed",
            report.applied(),
            report.skipped(),
            report.failed()
        );
        report
    }

    fn process(&self, dir: &Path, relative: &str) -> DirOutcome {
        let rule = match select(relative, &self.config.folder_rules) {
            Some(rule) => rule,
            None => {
                debug!("No rule matches {}", dir.display());
                return DirOutcome {
                    path: dir.to_path_buf(),
                    relative: relative.to_string(),
                    matched: None,
                    outcome: Outcome::Skipped,
                };
            }
        };

        let matched = MatchedRule {
            pattern: rule.pattern.clone(),
            permission: rule.permission.clone(),
        };
        debug!(
            "Found match for {}: '{}' -> permission set '{}'",
            dir.display(),
            rule.pattern,
            rule.permission
        );

        // Load-time validation guarantees resolution; degrade rather than
        // panic if handed a hand-built config that breaks the invariant
        let outcome = match self.config.permission(&rule.permission) {
            Some(set) => match apply(set, dir, self.provider) {
                Ok(()) => Outcome::Applied,
                Err(e) => {
                    warn!("Error applying permission set: {e}");
                    Outcome::Failed(e.to_string())
                }
            },
            None => {
                warn!(
                    "Rule '{}' references missing permission set '{}'",
                    rule.pattern, rule.permission
                );
                Outcome::Failed(format!("permission set '{}' not found", rule.permission))
            }
        };

        DirOutcome {
            path: dir.to_path_buf(),
            relative: relative.to_string(),
            matched: Some(matched),
            outcome,
        }
    }
}

/// Relative path of `dir` under `root`: `/`-separated, leading separator
/// retained, `/` for the root itself
fn relative_of(root: &Path, dir: &Path) -> String {
    let rel = dir.strip_prefix(root).unwrap_or_else(|_| Path::new(""));
    let mut out = String::from("/");
    let mut first = true;
    for component in rel.components() {
        if !first {
            out.push('/');
        }
        out.push_str(&component.as_os_str().to_string_lossy());
        first = false;
    }
    out
}
