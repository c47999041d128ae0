use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::entry::EntryKind;
use crate::error::WalkError;
use crate::results::{WalkResults, WalkStats};

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    /// Depth bound. Entries `d` containment steps below the root are emitted
    /// iff `d <= max_depth`. `None` means unlimited.
    pub max_depth: Option<usize>,
    pub collect_skipped: bool,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Execute a depth-bounded walk of `root` using the given options.
///
/// This is the core engine. Called by `WalkBuilder::run()` after the builder
/// has resolved its defaults.
///
/// The traversal is iterative over an explicit work stack of
/// `(directory, depth)` frames rather than recursive, so memory use is
/// bounded by the frontier size and not by tree depth. Each frame's `ReadDir`
/// handle is drained and dropped before the next frame is popped, so at most
/// one listing handle is open at any instant.
pub(crate) fn run(root: &Path, opts: EngineOptions) -> Result<WalkResults, WalkError> {
    // Root validation: missing or non-directory roots make the whole query
    // meaningless, so they fail the call rather than yield an empty result.
    // `metadata` follows symlinks here; a symlink to a directory is a valid root.
    let meta = fs::metadata(root).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WalkError::InvalidRoot(root.to_path_buf())
        } else {
            WalkError::from_io(root.to_path_buf(), e)
        }
    })?;
    if !meta.is_dir() {
        return Err(WalkError::InvalidRoot(root.to_path_buf()));
    }

    let start = Instant::now();
    let mut walk = Walker {
        max_depth: opts.max_depth,
        collect_skipped: opts.collect_skipped,
        stack: Vec::new(),
        paths: Vec::new(),
        skipped: Vec::new(),
        files: 0,
        dirs: 0,
    };

    // max_depth 0 means nothing below root is examined. The root has still
    // been validated above, so a bad root errors identically at every depth.
    if opts.max_depth != Some(0) {
        // Asymmetric failure policy: a root that cannot be listed aborts the
        // call, while the same failure deeper in the tree only skips that
        // subtree. Siblings already discovered stay in the results.
        let listing = fs::read_dir(root).map_err(|e| WalkError::from_io(root.to_path_buf(), e))?;
        walk.frame(root, listing, 1);

        while let Some((dir, depth)) = walk.stack.pop() {
            match fs::read_dir(&dir) {
                Ok(listing) => walk.frame(&dir, listing, depth),
                Err(e) => walk.skip(WalkError::from_io(dir, e)),
            }
        }
    }

    Ok(WalkResults {
        paths: walk.paths,
        stats: WalkStats::compute(walk.files, walk.dirs, start.elapsed()),
        skipped: walk.skipped,
    })
}

// ---------------------------------------------------------------------------
// Walker
// ---------------------------------------------------------------------------

/// Per-call traversal state. Owned by a single `run()` invocation; concurrent
/// calls never share any of this.
struct Walker {
    max_depth: Option<usize>,
    collect_skipped: bool,
    /// Pending frames: (directory to list, depth of the entries it will emit).
    stack: Vec<(PathBuf, usize)>,
    paths: Vec<PathBuf>,
    skipped: Vec<WalkError>,
    files: usize,
    dirs: usize,
}

impl Walker {
    /// Drain one directory listing, emitting entries at `depth` and queueing
    /// subdirectory frames at `depth + 1` while the bound allows.
    fn frame(&mut self, dir: &Path, listing: ReadDir, depth: usize) {
        let descend = self.max_depth.map_or(true, |max| depth < max);

        for res in listing {
            let entry = match res {
                Ok(entry) => entry,
                Err(e) => {
                    // A single unreadable entry does not poison its siblings.
                    self.skip(WalkError::from_io(dir.to_path_buf(), e));
                    continue;
                }
            };

            // A failed kind lookup demotes the entry to Other: its path is
            // still emitted, it is just never recursed into.
            let kind = entry
                .file_type()
                .map(EntryKind::classify)
                .unwrap_or(EntryKind::Other);

            // `DirEntry::path()` is the parent joined with exactly one name.
            let path = entry.path();

            match kind {
                EntryKind::File => self.files += 1,
                EntryKind::Dir => self.dirs += 1,
                EntryKind::Other => {}
            }

            if kind == EntryKind::Dir && descend {
                self.stack.push((path.clone(), depth + 1));
            }
            self.paths.push(path);
        }
    }

    /// Record a recoverable skip, or drop it when the caller did not ask.
    fn skip(&mut self, err: WalkError) {
        debug_assert!(err.is_recoverable());
        if self.collect_skipped {
            self.skipped.push(err);
        }
    }
}
