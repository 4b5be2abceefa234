/*!
 * In-Memory ACL Provider
 * Path-keyed descriptor store for tests and simulation runs
 *
 * Directories with no stored state read back as an empty descriptor, so a run
 * over a real tree works without seeding. Failure injection lets tests
 * exercise the engine's per-directory isolation contract.
 */

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ahash::RandomState;
use dashmap::DashMap;
use parking_lot::RwLock;

use super::descriptor::Descriptor;
use super::traits::AclProvider;
use super::types::{AclError, AclResult};

/// In-memory ACL provider
pub struct MemoryAclProvider {
    descriptors: DashMap<PathBuf, Descriptor, RandomState>,
    fail_reads: RwLock<HashSet<PathBuf>>,
    fail_writes: RwLock<HashSet<PathBuf>>,
}

impl MemoryAclProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: DashMap::with_hasher(RandomState::new()),
            fail_reads: RwLock::new(HashSet::new()),
            fail_writes: RwLock::new(HashSet::new()),
        }
    }

    /// Seed the stored descriptor for a path
    pub fn seed(&self, path: impl Into<PathBuf>, descriptor: Descriptor) {
        self.descriptors.insert(path.into(), descriptor);
    }

    /// Stored descriptor for a path, if any was written or seeded
    #[must_use]
    pub fn descriptor(&self, path: &Path) -> Option<Descriptor> {
        self.descriptors.get(path).map(|d| d.clone())
    }

    /// Make reads of `path` fail with a permission-denied error
    pub fn fail_read_on(&self, path: impl Into<PathBuf>) {
        self.fail_reads.write().insert(path.into());
    }

    /// Make writes of `path` fail with a permission-denied error
    pub fn fail_write_on(&self, path: impl Into<PathBuf>) {
        self.fail_writes.write().insert(path.into());
    }

    /// Number of paths with stored descriptors
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no descriptor has been stored yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for MemoryAclProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AclProvider for MemoryAclProvider {
    fn read_descriptor(&self, path: &Path) -> AclResult<Descriptor> {
        if self.fail_reads.read().contains(path) {
            return Err(AclError::PermissionDenied(format!(
                "read descriptor {}",
                path.display()
            )));
        }
        Ok(self
            .descriptors
            .get(path)
            .map(|d| d.clone())
            .unwrap_or_default())
    }

    fn write_descriptor(&self, path: &Path, descriptor: Descriptor) -> AclResult<()> {
        if self.fail_writes.read().contains(path) {
            return Err(AclError::PermissionDenied(format!(
                "write descriptor {}",
                path.display()
            )));
        }
        self.descriptors.insert(path.to_path_buf(), descriptor);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
