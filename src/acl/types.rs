/*!
 * ACL Types
 * Rights, inheritance flags, access-control entries, and error types
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ACL operation result
///
/// # Must Use
/// Provider operations can fail and must be handled
#[must_use = "ACL operations can fail and must be handled"]
pub type AclResult<T> = Result<T, AclError>;

/// ACL provider errors
///
/// Variants carry a context string naming the path or principal involved.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum AclError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Unknown principal: {0}")]
    UnknownPrincipal(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// One named filesystem right
///
/// The vocabulary (and the underlying masks) follow the NT access-rights
/// model: several names alias the same bit depending on whether the object is
/// a file or a container, and the composite rights union the atomic ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Right {
    ReadData,
    ListDirectory,
    WriteData,
    CreateFiles,
    AppendData,
    CreateDirectories,
    ReadExtendedAttributes,
    WriteExtendedAttributes,
    ExecuteFile,
    Traverse,
    DeleteSubdirectoriesAndFiles,
    ReadAttributes,
    WriteAttributes,
    Delete,
    ReadPermissions,
    ChangePermissions,
    TakeOwnership,
    Synchronize,
    // Composites
    Read,
    ReadAndExecute,
    Write,
    Modify,
    FullControl,
}

impl Right {
    /// Access mask for this right
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u32 {
        match self {
            Right::ReadData | Right::ListDirectory => 0x0000_0001,
            Right::WriteData | Right::CreateFiles => 0x0000_0002,
            Right::AppendData | Right::CreateDirectories => 0x0000_0004,
            Right::ReadExtendedAttributes => 0x0000_0008,
            Right::WriteExtendedAttributes => 0x0000_0010,
            Right::ExecuteFile | Right::Traverse => 0x0000_0020,
            Right::DeleteSubdirectoriesAndFiles => 0x0000_0040,
            Right::ReadAttributes => 0x0000_0080,
            Right::WriteAttributes => 0x0000_0100,
            Right::Delete => 0x0001_0000,
            Right::ReadPermissions => 0x0002_0000,
            Right::ChangePermissions => 0x0004_0000,
            Right::TakeOwnership => 0x0008_0000,
            Right::Synchronize => 0x0010_0000,
            Right::Read => 0x0002_0089,
            Right::ReadAndExecute => 0x0002_00A9,
            Right::Write => 0x0000_0116,
            Right::Modify => 0x0003_01BF,
            Right::FullControl => 0x001F_01FF,
        }
    }
}

/// Decomposition order: composites first, widest coverage first, then one
/// canonical name per atomic bit (aliases are accepted on input only).
const DECOMPOSE_ORDER: [Right; 19] = [
    Right::FullControl,
    Right::Modify,
    Right::ReadAndExecute,
    Right::Read,
    Right::Write,
    Right::ReadData,
    Right::WriteData,
    Right::AppendData,
    Right::ReadExtendedAttributes,
    Right::WriteExtendedAttributes,
    Right::ExecuteFile,
    Right::DeleteSubdirectoriesAndFiles,
    Right::ReadAttributes,
    Right::WriteAttributes,
    Right::Delete,
    Right::ReadPermissions,
    Right::ChangePermissions,
    Right::TakeOwnership,
    Right::Synchronize,
];

/// Bitset of filesystem rights
///
/// Serializes as a list of named rights; the composite names absorb their
/// atomic parts, so `["full_control"]` round-trips as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Right>", into = "Vec<Right>")]
pub struct Rights(u32);

impl Rights {
    /// Empty rights set
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Rights set from a raw access mask
    #[inline]
    #[must_use]
    pub const fn from_mask(mask: u32) -> Self {
        Self(mask)
    }

    /// Raw access mask
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.0
    }

    /// Add a right to the set
    #[inline]
    #[must_use]
    pub const fn with(self, right: Right) -> Self {
        Self(self.0 | right.mask())
    }

    /// Check whether every bit of `right` is present
    #[inline]
    #[must_use]
    pub const fn contains(self, right: Right) -> bool {
        self.0 & right.mask() == right.mask()
    }

    /// Check for the empty set
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Right> for Rights {
    fn from(right: Right) -> Self {
        Self(right.mask())
    }
}

impl From<Vec<Right>> for Rights {
    fn from(rights: Vec<Right>) -> Self {
        Self(rights.iter().fold(0, |mask, r| mask | r.mask()))
    }
}

impl From<Rights> for Vec<Right> {
    fn from(rights: Rights) -> Self {
        let mut remaining = rights.0;
        let mut out = Vec::new();
        for right in DECOMPOSE_ORDER {
            let mask = right.mask();
            if mask != 0 && remaining & mask == mask {
                out.push(right);
                remaining &= !mask;
            }
        }
        out
    }
}

impl FromIterator<Right> for Rights {
    fn from_iter<I: IntoIterator<Item = Right>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |mask, r| mask | r.mask()))
    }
}

/// Skip-serializing predicate for unset flags
#[inline]
fn is_false(value: &bool) -> bool {
    !*value
}

/// How an entry propagates to child containers and objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", default)]
pub struct InheritanceFlags {
    #[serde(skip_serializing_if = "is_false")]
    pub container_inherit: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub object_inherit: bool,
}

impl InheritanceFlags {
    /// No inheritance
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self {
            container_inherit: false,
            object_inherit: false,
        }
    }

    /// Inherit to both subdirectories and files
    #[inline]
    #[must_use]
    pub const fn containers_and_objects() -> Self {
        Self {
            container_inherit: true,
            object_inherit: true,
        }
    }
}

/// How inheritance itself propagates downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", default)]
pub struct PropagationFlags {
    #[serde(skip_serializing_if = "is_false")]
    pub inherit_only: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub no_propagate_inherit: bool,
}

impl PropagationFlags {
    /// Default propagation
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self {
            inherit_only: false,
            no_propagate_inherit: false,
        }
    }
}

/// Whether an entry grants or denies its rights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    #[default]
    Allow,
    Deny,
}

/// One access-control entry within a descriptor
///
/// The principal is opaque to the engine; whether it names a real user or
/// group is the provider's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AclEntry {
    pub principal: String,
    pub rights: Rights,
    #[serde(default)]
    pub inheritance: InheritanceFlags,
    #[serde(default)]
    pub propagation: PropagationFlags,
    #[serde(default)]
    pub kind: EntryKind,
}

impl AclEntry {
    /// Create an allow entry with default inheritance
    pub fn allow(principal: impl Into<String>, rights: Rights) -> Self {
        Self {
            principal: principal.into(),
            rights,
            inheritance: InheritanceFlags::default(),
            propagation: PropagationFlags::default(),
            kind: EntryKind::Allow,
        }
    }

    /// Create a deny entry with default inheritance
    pub fn deny(principal: impl Into<String>, rights: Rights) -> Self {
        Self {
            principal: principal.into(),
            rights,
            inheritance: InheritanceFlags::default(),
            propagation: PropagationFlags::default(),
            kind: EntryKind::Deny,
        }
    }
}
