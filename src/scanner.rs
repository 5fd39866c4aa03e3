/*!
 * Directory traversal: depth-first, sorted, exclusion-pruned
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::policy::{EntryKind, ExclusionPolicy};
use crate::progress::{CancelToken, ProgressEvent, ProgressSink};
use crate::types::{DirectoryEntry, FileEntry, RunOutcome, WalkEvent};
use crate::utils::lowercase_extension;

/// Scanner for directory contents.
///
/// Walks the tree top-down, prunes excluded directories before descending
/// into them, and yields a deterministic event sequence: each surviving
/// directory, then its files in byte-order alphabetical sequence, then its
/// subdirectories recursively in the same order. Restartable only by a new
/// `walk` call.
pub struct Scanner {
    config: Config,
    policy: ExclusionPolicy,
    cancel: CancelToken,
    sink: Arc<dyn ProgressSink>,
    skipped: usize,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, cancel: CancelToken, sink: Arc<dyn ProgressSink>) -> Self {
        let policy = ExclusionPolicy::new(config.clone());
        Self {
            config,
            policy,
            cancel,
            sink,
            skipped: 0,
        }
    }

    /// Paths rejected by the exclusion policy during the last walk.
    ///
    /// The skip count is accumulated here because the writer never sees
    /// excluded entries; the writer folds it into the run statistics.
    pub fn files_skipped(&self) -> usize {
        self.skipped
    }

    /// Walk the tree, handing each event to `visit`.
    ///
    /// The root directory is always visited and is never tested against
    /// the exclusion policy. Cancellation is checked once per directory,
    /// before the directory is enumerated.
    pub fn walk<F>(&mut self, mut visit: F) -> Result<RunOutcome>
    where
        F: FnMut(WalkEvent) -> Result<()>,
    {
        self.skipped = 0;
        let root = fs::canonicalize(&self.config.root_dir)?;
        // The report must not swallow its own output file.
        let output_file = fs::canonicalize(&self.config.output_file).ok();

        self.walk_directory(&root, Path::new("."), 0, output_file.as_deref(), &mut visit)
    }

    fn walk_directory<F>(
        &mut self,
        abs_path: &Path,
        rel_path: &Path,
        depth: usize,
        output_file: Option<&Path>,
        visit: &mut F,
    ) -> Result<RunOutcome>
    where
        F: FnMut(WalkEvent) -> Result<()>,
    {
        if self.cancel.is_cancelled() {
            return Ok(RunOutcome::Cancelled);
        }

        let mut subdirectories: Vec<String> = Vec::new();
        let mut files: Vec<FileEntry> = Vec::new();

        for entry in WalkDir::new(abs_path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            let name = entry.file_name().to_string_lossy().to_string();

            if entry.file_type().is_dir() {
                if self.policy.is_excluded(entry.path(), EntryKind::Directory) {
                    self.skipped += 1;
                    self.sink.notify(ProgressEvent::EntrySkipped(entry.path()));
                    continue;
                }
                subdirectories.push(name);
            } else {
                if output_file.map_or(false, |out| entry.path() == out) {
                    continue;
                }

                let size = entry.metadata().ok().map(|m| m.len());
                if self
                    .policy
                    .is_excluded(entry.path(), EntryKind::File { size })
                {
                    self.skipped += 1;
                    self.sink.notify(ProgressEvent::EntrySkipped(entry.path()));
                    continue;
                }

                files.push(FileEntry {
                    extension: lowercase_extension(entry.path()),
                    path: entry.path().to_path_buf(),
                    relative_path: rel_path.join(&name),
                    size,
                    name,
                });
            }
        }

        subdirectories.sort();
        files.sort_by(|a, b| a.name.cmp(&b.name));

        // Emission policy: the root always appears; other directories only
        // when they have surviving content or empty directories are wanted.
        let emit = depth == 0
            || !files.is_empty()
            || !subdirectories.is_empty()
            || self.config.include_empty_dirs;

        if emit {
            visit(WalkEvent::Directory(DirectoryEntry {
                relative_path: rel_path.to_path_buf(),
                depth,
                subdirectories: subdirectories.clone(),
            }))?;

            for file in files {
                visit(WalkEvent::File(file))?;
            }
        }

        for name in subdirectories {
            let child_abs = abs_path.join(&name);
            let child_rel = if depth == 0 {
                PathBuf::from(&name)
            } else {
                rel_path.join(&name)
            };

            if let RunOutcome::Cancelled =
                self.walk_directory(&child_abs, &child_rel, depth + 1, output_file, visit)?
            {
                return Ok(RunOutcome::Cancelled);
            }
        }

        Ok(RunOutcome::Completed)
    }
}
