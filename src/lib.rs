/*!
 * aclsweep Library
 * Rule-driven access-control application for directory trees
 *
 * Walks a directory subtree, selects the governing folder rule per directory
 * (first match wins), and rewrites that directory's access-control descriptor
 * through an opaque provider. Per-directory failures are isolated: one
 * unreadable subtree or one failing descriptor write never aborts the run.
 */

pub mod acl;
pub mod config;
pub mod engine;

// Re-exports
pub use acl::{
    AclEntry, AclError, AclProvider, AclResult, Descriptor, DescriptorEntry, EntryKind,
    InheritanceFlags, MemoryAclProvider, PropagationFlags, Right, Rights,
};
pub use config::{load_path, load_str, AccessEntry, Config, ConfigError, FolderRule, PermissionSet};
pub use engine::{apply, select, ApplyError, DirOutcome, DirWalker, MatchedRule, Orchestrator, Outcome, RunReport};
