/*!
 * Engine Module
 * The matching-and-application core: traversal, rule selection, descriptor
 * rewrite, and the run loop that composes them
 */

pub mod applier;
pub mod matcher;
pub mod orchestrator;
pub mod report;
pub mod walker;

// Re-exports
pub use applier::{apply, ApplyError};
pub use matcher::select;
pub use orchestrator::Orchestrator;
pub use report::{DirOutcome, MatchedRule, Outcome, RunReport};
pub use walker::{DirWalker, Walk};
