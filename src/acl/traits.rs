/*!
 * ACL Provider Trait
 * Opaque capability for reading and writing directory descriptors
 */

use std::path::Path;

use super::descriptor::Descriptor;
use super::types::AclResult;

/// Access-control provider
///
/// Owns the on-disk/OS representation of security descriptors entirely. The
/// engine only reads a descriptor, mutates the returned value, and submits it
/// back; it never inspects provider internals. Principal validity is also the
/// provider's call: an unknown principal surfaces as an error from
/// [`write_descriptor`](AclProvider::write_descriptor).
pub trait AclProvider: Send + Sync {
    /// Read the current descriptor of a directory
    fn read_descriptor(&self, path: &Path) -> AclResult<Descriptor>;

    /// Write a descriptor back to a directory
    fn write_descriptor(&self, path: &Path, descriptor: Descriptor) -> AclResult<()>;

    /// Provider name/type
    fn name(&self) -> &str;
}
