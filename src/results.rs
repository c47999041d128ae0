use std::path::PathBuf;
use std::time::Duration;

use crate::error::WalkError;

/// The output of a completed walk.
///
/// `skipped` is opt-in, disabled by default to avoid allocation overhead in
/// the common case. Enable it on the builder with `.collect_skipped(true)`.
pub struct WalkResults {
    /// Every path found within the depth bound, in the order the OS yielded
    /// the underlying directory entries. Not sorted, not deduplicated, and
    /// not guaranteed stable across runs or platforms.
    pub paths: Vec<PathBuf>,

    /// Walk performance statistics.
    pub stats: WalkStats,

    /// Unreadable directories skipped during the walk (permission denied,
    /// transient I/O). Only populated if `.collect_skipped(true)` was set on
    /// the builder. All entries here are recoverable by construction; a
    /// fatal root error surfaces as the call's `Err` instead.
    pub skipped: Vec<WalkError>,
}

/// Performance statistics for a completed walk.
pub struct WalkStats {
    /// Number of regular files emitted.
    pub files: usize,

    /// Number of directories emitted.
    pub dirs: usize,

    /// Wall-clock time from walk start to completion.
    pub duration: Duration,

    /// Entries emitted per second. Convenience field, equals
    /// `(files + dirs) / duration.as_secs_f64()`, clamped to 0 on
    /// zero-duration runs.
    pub entries_per_sec: usize,
}

impl WalkStats {
    /// Compute `entries_per_sec` from raw counts and duration.
    pub(crate) fn compute(files: usize, dirs: usize, duration: Duration) -> Self {
        let total = files + dirs;
        let eps = if duration.as_secs_f64() > 0.0 {
            (total as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            files,
            dirs,
            duration,
            entries_per_sec: eps,
        }
    }
}
