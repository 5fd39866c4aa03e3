/*!
 * DirParse - Consolidate a directory tree into a single Markdown report
 *
 * This library walks a filesystem subtree, filters entries through
 * configurable exclusion rules, and serializes the surviving files
 * (path, size, and full content for recognized text types) into one
 * structured Markdown document.
 */

pub mod classify;
pub mod config;
pub mod error;
pub mod policy;
pub mod progress;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use classify::{Classification, Classifier};
pub use config::Config;
pub use error::{DirparseError, Result};
pub use policy::{EntryKind, ExclusionPolicy};
pub use progress::{CancelToken, NullSink, ProgressEvent, ProgressSink};
pub use report::{Reporter, RunReport};
pub use scanner::Scanner;
pub use types::{DirectoryEntry, FileEntry, RunOutcome, RunStatistics, RunSummary, WalkEvent};
pub use utils::{count_files, format_file_size};
pub use writer::MarkdownWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
