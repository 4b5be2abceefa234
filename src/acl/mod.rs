/*!
 * ACL Module
 * Access-control data model and the provider boundary
 *
 * The engine never touches an OS security API directly: everything it needs
 * from the platform goes through the [`AclProvider`] trait, which reads and
 * writes opaque [`Descriptor`] values. The in-memory provider backs tests and
 * the CLI's simulation mode.
 */

pub mod descriptor;
pub mod memory;
pub mod traits;
pub mod types;

// Re-exports
pub use descriptor::{Descriptor, DescriptorEntry};
pub use memory::MemoryAclProvider;
pub use traits::AclProvider;
pub use types::{
    AclEntry, AclError, AclResult, EntryKind, InheritanceFlags, PropagationFlags, Right, Rights,
};
