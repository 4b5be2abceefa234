/*!
 * Configuration Module
 * The validated, in-memory rule model and its document loader
 *
 * The engine consumes only a validated [`Config`]; every invariant (unique
 * permission names, resolvable rule references, sane depth bounds) is enforced
 * here, before the engine ever runs.
 */

pub mod loader;
pub mod types;

// Re-exports
pub use loader::{load_path, load_str, ConfigError, ConfigResult};
pub use types::{AccessEntry, Config, FolderRule, PermissionSet};
