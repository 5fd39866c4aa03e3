/*!
 * Core types and data structures for the dirparse pipeline
 */

use std::path::PathBuf;

/// A directory that survived exclusion filtering.
///
/// Created once per visited directory and handed to the writer before any
/// of the directory's files; never mutated after creation.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Path relative to the scan root (the root itself is `.`)
    pub relative_path: PathBuf,
    /// Number of path components below the root (root is 0)
    pub depth: usize,
    /// Surviving child directory names, alphabetically sorted
    pub subdirectories: Vec<String>,
}

/// A file that survived exclusion filtering.
///
/// Content is read lazily by the writer, not carried here.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// File name
    pub name: String,
    /// Absolute path, used for the single content read
    pub path: PathBuf,
    /// Path relative to the scan root, including the file name
    pub relative_path: PathBuf,
    /// Lowercase extension with leading dot, empty string if none
    pub extension: String,
    /// Size in bytes; `None` when the metadata lookup failed
    pub size: Option<u64>,
}

/// Event emitted by the scanner during a walk
#[derive(Debug, Clone)]
pub enum WalkEvent {
    /// A directory was entered
    Directory(DirectoryEntry),
    /// A file was visited (always after its directory's event)
    File(FileEntry),
}

/// Counters for a single consolidation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Directories that passed the emission policy
    pub directories_visited: usize,
    /// Files whose block was written to the report
    pub files_included: usize,
    /// Paths rejected by the exclusion policy
    pub files_skipped: usize,
    /// Accumulated byte count of included files with a known size
    pub bytes_included: u64,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The whole tree was processed
    Completed,
    /// Cancellation was honored at a directory boundary
    Cancelled,
}

/// Final result of a consolidation run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// How the run ended
    pub outcome: RunOutcome,
    /// Final counters
    pub stats: RunStatistics,
}
