/*!
 * Run Report
 * Structured per-run outcomes for presentation layers
 *
 * The engine never formats output; it returns one of these and the CLI (or
 * any other caller) renders it.
 */

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampSeconds};
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

/// Identity of the rule that governed a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchedRule {
    pub pattern: String,
    pub permission: String,
}

/// Outcome of processing one directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "details")]
pub enum Outcome {
    /// A rule matched and its permission set was written
    Applied,
    /// No rule matched; the directory was left untouched
    Skipped,
    /// A rule matched but applying it failed
    Failed(String),
}

impl Outcome {
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Per-directory record in the run report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DirOutcome {
    /// Absolute directory path
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated with leading separator
    pub relative: String,
    /// Matching rule, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub matched: Option<MatchedRule>,
    pub outcome: Outcome,
}

/// Complete record of one traversal run
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunReport {
    pub root: PathBuf,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub started_at: SystemTime,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub finished_at: SystemTime,
    pub outcomes: Vec<DirOutcome>,
}

impl RunReport {
    /// Directories where a permission set was applied
    #[must_use]
    pub fn applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Applied)
            .count()
    }

    /// Directories no rule matched
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Skipped)
            .count()
    }

    /// Directories where applying failed
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_failed()).count()
    }

    /// Whether the run completed without per-directory failures
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    /// Wall-clock duration of the run
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished_at
            .duration_since(self.started_at)
            .unwrap_or(Duration::ZERO)
    }
}
