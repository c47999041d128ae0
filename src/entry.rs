use std::fs::FileType;

/// The kind of a directory entry, determined once per entry and carried
/// through the rest of the traversal.
///
/// Symbolic links are classified by what the directory listing reports
/// without resolving the link target, so they land in [`EntryKind::Other`]
/// and are never recursed into. Sockets, devices, and FIFOs land there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory. The only kind the engine will descend into.
    Dir,

    /// Anything else (symlinks, device files, pipes, sockets), or an entry
    /// whose kind could not be determined.
    Other,
}

impl EntryKind {
    /// Map a `std::fs::FileType` to a kind.
    ///
    /// `file_type()` on a `DirEntry` does not follow symlinks, so a symlink
    /// to a directory reports as a symlink and classifies as `Other`.
    pub fn classify(ft: FileType) -> Self {
        if ft.is_dir() {
            Self::Dir
        } else if ft.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}
