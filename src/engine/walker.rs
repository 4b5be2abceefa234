/*!
 * Directory Walker
 * Bounded recursive enumeration of a directory subtree
 *
 * The depth bound gates recursion, not emission: a directory sitting at the
 * bound is still yielded, its children are not descended into. One
 * inaccessible subtree never aborts the walk; it is skipped and the walk
 * continues with siblings.
 */

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

/// Bounded directory walker
///
/// A walker is just the bound; each call to [`enumerate`](DirWalker::enumerate)
/// produces a fresh, single-use traversal.
#[derive(Debug, Clone, Copy)]
pub struct DirWalker {
    max_depth: i32,
}

impl DirWalker {
    /// Create a walker with the given recursion bound; -1 = unlimited
    #[must_use]
    pub fn new(max_depth: i32) -> Self {
        Self { max_depth }
    }

    /// Lazily enumerate `root` and its subdirectories, depth-first pre-order
    ///
    /// `root` itself is the first item. Depth 0 is root's immediate children;
    /// a child at depth `max_depth` is emitted but not recursed into.
    pub fn enumerate(&self, root: &Path) -> Walk {
        Walk {
            max_depth: self.max_depth,
            pending: vec![Frame {
                path: root.to_path_buf(),
                child_depth: 0,
                descend: true,
            }],
        }
    }
}

struct Frame {
    path: PathBuf,
    /// Depth assigned to this directory's children
    child_depth: i32,
    /// Whether this directory's children are listed at all
    descend: bool,
}

/// Lazy, non-restartable traversal produced by [`DirWalker::enumerate`]
pub struct Walk {
    max_depth: i32,
    pending: Vec<Frame>,
}

impl Walk {
    /// List subdirectories of `path`, sorted by name for stable ordering
    ///
    /// Enumeration failures skip the subtree rather than aborting the walk.
    fn subdirs(path: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Skipping unreadable subtree {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping entry in {}: {}", path.display(), e);
                    continue;
                }
            };
            // file_type() does not follow symlinks, so link cycles cannot
            // trap the walk
            match entry.file_type() {
                Ok(ft) if ft.is_dir() => dirs.push(entry.path()),
                Ok(_) => {}
                Err(e) => {
                    debug!("Skipping entry in {}: {}", path.display(), e);
                }
            }
        }
        dirs.sort();
        dirs
    }
}

impl Iterator for Walk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let frame = self.pending.pop()?;

        if frame.descend {
            let descend_children = self.max_depth == -1 || frame.child_depth < self.max_depth;
            // Reverse push so siblings pop in sorted order
            for child in Self::subdirs(&frame.path).into_iter().rev() {
                self.pending.push(Frame {
                    path: child,
                    child_depth: frame.child_depth + 1,
                    descend: descend_children,
                });
            }
        }

        Some(frame.path)
    }
}
