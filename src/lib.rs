//! # depthwalk
//!
//! Depth-bounded directory tree enumerator — fast, embeddable, zero opinions.
//!
//! depthwalk owns the traversal engine: directory-entry enumeration over an
//! explicit work stack, depth accounting, path construction, and result
//! accumulation. It does **not** own output formatting, filtering, globbing,
//! or metadata collection — those belong to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(dir.path().join("a.txt"), "").unwrap();
//! fs::create_dir(dir.path().join("sub")).unwrap();
//! fs::write(dir.path().join("sub").join("b.txt"), "").unwrap();
//!
//! // Depth 1: the root's immediate children only.
//! let paths = depthwalk::walk(dir.path(), 1).unwrap();
//! assert_eq!(paths.len(), 2);
//!
//! // Depth 2 adds sub/b.txt.
//! let paths = depthwalk::walk(dir.path(), 2).unwrap();
//! assert_eq!(paths.len(), 3);
//! ```
//!
//! # Depth convention
//!
//! An entry `d` directory-containment steps below the root is emitted iff
//! `d <= max_depth`. So `max_depth = 0` yields an empty walk (the root is
//! still validated), `max_depth = 1` yields the root's immediate children,
//! and the builder's default is unlimited depth.
//!
//! # Error model
//!
//! An unusable root fails the whole call: [`WalkError::InvalidRoot`] when the
//! path is missing or not a directory, [`WalkError::PermissionDenied`] or
//! [`WalkError::ReadFailure`] when the root exists but cannot be listed. An
//! empty directory is therefore never confused with a failed read.
//!
//! Unreadable directories *below* the root never fail the call: their
//! subtrees are skipped and every sibling already discovered stays in the
//! results. Use [`walker()`] with `.collect_skipped(true)` to observe the
//! skips in [`WalkResults::skipped`].
//!
//! # Known limitations
//!
//! Symbolic links are classified by the kind the directory listing reports,
//! without resolution. A symlink to a directory is emitted as
//! [`EntryKind::Other`] and never recursed into, so there is no symlink-loop
//! detection because loops cannot occur.

#![forbid(unsafe_code)]

mod builder;
mod engine;
mod entry;
mod error;
mod results;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::WalkBuilder;
pub use entry::EntryKind;
pub use error::WalkError;
pub use results::{WalkResults, WalkStats};

use std::path::{Path, PathBuf};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Walk `root` and return every path within `max_depth`, in OS listing order.
///
/// This is the whole-crate-in-one-call form of [`walker()`]: paths only, no
/// statistics, skipped subtrees silently dropped.
///
/// # Errors
///
/// Fails only for an unusable root; see the [error model](crate#error-model).
///
/// # Example
///
/// ```rust
/// let paths = depthwalk::walk(".", 1).unwrap();
/// assert!(!paths.is_empty());
/// ```
pub fn walk(root: impl AsRef<Path>, max_depth: usize) -> Result<Vec<PathBuf>, WalkError> {
    let results = walker(root).max_depth(max_depth).run()?;
    Ok(results.paths)
}

/// Create a new [`WalkBuilder`] to configure and run a walk.
///
/// # Example
///
/// ```rust
/// let results = depthwalk::walker(".")
///     .max_depth(1)
///     .collect_skipped(true)
///     .run()
///     .unwrap();
///
/// assert_eq!(results.paths.len(), results.stats.files + results.stats.dirs);
/// ```
pub fn walker(root: impl AsRef<Path>) -> WalkBuilder {
    WalkBuilder::new(root.as_ref().to_path_buf())
}
