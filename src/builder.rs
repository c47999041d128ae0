use std::path::PathBuf;

use crate::engine::{run, EngineOptions};
use crate::error::WalkError;
use crate::results::WalkResults;

// ---------------------------------------------------------------------------
// WalkBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a walk.
///
/// Created via [`depthwalk::walker()`](crate::walker). Configure with chained
/// builder methods, then call [`run()`](WalkBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let results = depthwalk::walker("/var/log")
///     .max_depth(2)
///     .collect_skipped(true)
///     .run()?;
/// ```
pub struct WalkBuilder {
    root: PathBuf,
    max_depth: Option<usize>,
    collect_skipped: bool,
}

impl WalkBuilder {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            max_depth: None,
            collect_skipped: false,
        }
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Maximum traversal depth. `1` means the root's immediate children
    /// only, `2` adds their children, and so on. `0` yields an empty walk
    /// (the root is still validated). Unlimited by default.
    pub fn max_depth(mut self, d: usize) -> Self {
        self.max_depth = Some(d);
        self
    }

    /// Collect skipped directories into [`WalkResults::skipped`].
    ///
    /// Disabled by default. When enabled, recoverable errors below the root
    /// (permission denied, transient I/O) are stored in
    /// [`WalkResults::skipped`] rather than silently dropped.
    pub fn collect_skipped(mut self, yes: bool) -> Self {
        self.collect_skipped = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the walk and return results.
    ///
    /// Blocks until the walk completes. There is no cancellation point; a
    /// caller wanting bounded wall-clock time must impose it externally.
    ///
    /// # Errors
    ///
    /// Returns `Err` only for an unusable root ([`WalkError::InvalidRoot`]
    /// for a missing or non-directory path, [`WalkError::PermissionDenied`]
    /// or [`WalkError::ReadFailure`] when the root itself cannot be listed).
    /// Failures below the root never fail the call; they are collected into
    /// [`WalkResults::skipped`] when `.collect_skipped(true)` is set.
    pub fn run(self) -> Result<WalkResults, WalkError> {
        let opts = EngineOptions {
            max_depth: self.max_depth,
            collect_skipped: self.collect_skipped,
        };
        run(&self.root, opts)
    }
}
