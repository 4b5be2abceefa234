/*!
 * Rule Applier
 * Deterministic application of a permission set to a directory's descriptor
 *
 * Read, rewrite, write back. The clean/preserve interaction is exact: with
 * `clean_explicit` set, inherited entries join the removal scan only when
 * `preserve_inherited` is false; without `clean_explicit`, nothing is removed
 * regardless.
 */

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::acl::{AclEntry, AclError, AclProvider};
use crate::config::PermissionSet;

/// Failure to apply a permission set to one directory
///
/// Carries the target path and the provider-level cause; callers report it
/// and continue with the next directory.
#[derive(Error, Debug)]
#[error("{} could not be modified: {source}", .path.display())]
pub struct ApplyError {
    pub path: PathBuf,
    #[source]
    pub source: AclError,
}

/// Apply `set` to the directory at `target` through `provider`
pub fn apply(
    set: &PermissionSet,
    target: &Path,
    provider: &dyn AclProvider,
) -> Result<(), ApplyError> {
    let fail = |source: AclError| ApplyError {
        path: target.to_path_buf(),
        source,
    };

    let mut descriptor = provider.read_descriptor(target).map_err(fail)?;

    if set.clean_explicit {
        // Inherited entries enter the removal scan only when they are not
        // being preserved
        let existing = descriptor.access_entries(!set.preserve_inherited);
        debug!(
            "Clearing {} existing entries on {}",
            existing.len(),
            target.display()
        );
        for entry in &existing {
            descriptor.remove_entry(entry);
        }
    }

    // Insertion order is ACE evaluation order; duplicates are added as-is
    for entry in &set.entries {
        descriptor.add_entry(AclEntry::from(entry));
    }

    descriptor.set_protection(set.protect_from_inheritance, set.preserve_inherited);

    provider.write_descriptor(target, descriptor).map_err(fail)
}
