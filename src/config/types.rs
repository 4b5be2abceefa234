/*!
 * Rule Model
 * Permission sets, access entries, folder rules, and the run configuration
 */

use serde::{Deserialize, Serialize};

use crate::acl::{AclEntry, EntryKind, InheritanceFlags, PropagationFlags, Rights};

/// A named, reusable permission bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PermissionSet {
    /// Unique identifier, referenced by folder rules
    pub name: String,
    /// Mark the directory to not inherit rules from its parent
    #[serde(default)]
    pub protect_from_inheritance: bool,
    /// Keep inherited entries when clearing existing ones
    #[serde(default)]
    pub preserve_inherited: bool,
    /// Remove existing entries before adding new ones
    #[serde(default)]
    pub clean_explicit: bool,
    /// Entries to add, in order; order determines ACE evaluation order
    #[serde(default)]
    pub entries: Vec<AccessEntry>,
}

/// One access-control rule to add to matched directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AccessEntry {
    /// User or group identifier; validity is the ACL provider's concern
    pub principal: String,
    #[serde(default)]
    pub rights: Rights,
    #[serde(default)]
    pub inheritance: InheritanceFlags,
    #[serde(default)]
    pub propagation: PropagationFlags,
    #[serde(default)]
    pub kind: EntryKind,
}

impl From<&AccessEntry> for AclEntry {
    fn from(entry: &AccessEntry) -> Self {
        Self {
            principal: entry.principal.clone(),
            rights: entry.rights,
            inheritance: entry.inheritance,
            propagation: entry.propagation,
            kind: entry.kind,
        }
    }
}

/// One path-matching clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FolderRule {
    /// Literal path, or a pattern with `*` / `?` wildcards
    pub pattern: String,
    /// Extra path segments a wildcard match may consume; -1 = unlimited.
    /// Meaningful only for wildcard patterns.
    #[serde(default = "unlimited")]
    pub star_depth: i32,
    /// Name of the governing permission set
    pub permission: String,
}

impl FolderRule {
    /// Whether the pattern contains wildcard characters
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.pattern.contains('*') || self.pattern.contains('?')
    }
}

/// The complete, validated rule set for one run
///
/// Constructed once by the loader, immutable for the duration of a traversal,
/// and shared by reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Permission sets referenced by the folder rules
    #[serde(default)]
    pub permissions: Vec<PermissionSet>,
    /// Rules in match-priority order: first match wins
    #[serde(default)]
    pub folder_rules: Vec<FolderRule>,
    /// Global traversal recursion bound; -1 = unlimited
    #[serde(default = "unlimited")]
    pub max_scan_depth: i32,
}

fn unlimited() -> i32 {
    -1
}

impl Config {
    /// Look up a permission set by name
    #[must_use]
    pub fn permission(&self, name: &str) -> Option<&PermissionSet> {
        self.permissions.iter().find(|p| p.name == name)
    }
}
