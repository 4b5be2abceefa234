/*!
 * Security Descriptor
 * Mutable access-control state of a single directory
 *
 * A descriptor is read from a provider, rewritten by the applier, and written
 * back; the engine never holds one beyond a single directory's processing.
 */

use serde::{Deserialize, Serialize};

use super::types::AclEntry;

/// One entry within a descriptor, tagged with its origin
///
/// Inherited entries were propagated from a parent container; explicit entries
/// were set directly on the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DescriptorEntry {
    pub entry: AclEntry,
    #[serde(default)]
    pub inherited: bool,
}

impl DescriptorEntry {
    /// Explicit entry
    pub fn explicit(entry: AclEntry) -> Self {
        Self {
            entry,
            inherited: false,
        }
    }

    /// Entry propagated from a parent container
    pub fn inherited(entry: AclEntry) -> Self {
        Self {
            entry,
            inherited: true,
        }
    }
}

/// Access-control state of a directory
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Descriptor {
    entries: Vec<DescriptorEntry>,
    #[serde(default)]
    protected: bool,
    #[serde(default)]
    preserve_inherited: bool,
}

impl Descriptor {
    /// Empty descriptor with no entries and inheritance enabled
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of entries: explicit always, inherited only on request
    ///
    /// Mirrors the enumeration the applier runs before removal, so inherited
    /// entries are only visible when the caller intends to remove them.
    #[must_use]
    pub fn access_entries(&self, include_inherited: bool) -> Vec<DescriptorEntry> {
        self.entries
            .iter()
            .filter(|e| include_inherited || !e.inherited)
            .cloned()
            .collect()
    }

    /// Add an explicit entry at the end of the list
    pub fn add_entry(&mut self, entry: AclEntry) {
        self.entries.push(DescriptorEntry::explicit(entry));
    }

    /// Add an inherited entry (used when seeding provider state)
    pub fn add_inherited(&mut self, entry: AclEntry) {
        self.entries.push(DescriptorEntry::inherited(entry));
    }

    /// Remove the first entry equal to `target`; returns whether one was found
    pub fn remove_entry(&mut self, target: &DescriptorEntry) -> bool {
        match self.entries.iter().position(|e| e == target) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Set inheritance protection
    ///
    /// `protected` stops rules flowing in from the parent; `preserve_inherited`
    /// controls whether already-inherited entries survive that cut.
    pub fn set_protection(&mut self, protected: bool, preserve_inherited: bool) {
        self.protected = protected;
        self.preserve_inherited = preserve_inherited;
    }

    /// Whether the directory is protected from parent inheritance
    #[inline]
    #[must_use]
    pub fn is_protected(&self) -> bool {
        self.protected
    }

    /// Whether inherited entries are preserved under protection
    #[inline]
    #[must_use]
    pub fn preserves_inherited(&self) -> bool {
        self.preserve_inherited
    }

    /// Explicit entries, in list order
    #[must_use]
    pub fn explicit_entries(&self) -> Vec<AclEntry> {
        self.entries
            .iter()
            .filter(|e| !e.inherited)
            .map(|e| e.entry.clone())
            .collect()
    }

    /// Inherited entries, in list order
    #[must_use]
    pub fn inherited_entries(&self) -> Vec<AclEntry> {
        self.entries
            .iter()
            .filter(|e| e.inherited)
            .map(|e| e.entry.clone())
            .collect()
    }

    /// Total entry count
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the descriptor has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
