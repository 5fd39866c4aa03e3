/*!
 * Streaming Markdown report writer
 */

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::sync::Arc;

use chrono::Local;

use crate::classify::{Classification, Classifier};
use crate::config::Config;
use crate::error::Result;
use crate::progress::{ProgressEvent, ProgressSink};
use crate::scanner::Scanner;
use crate::types::{DirectoryEntry, FileEntry, RunOutcome, RunStatistics, RunSummary, WalkEvent};
use crate::utils::group_digits;

/// Markdown report builder.
///
/// Consumes the scanner's event sequence and streams the document
/// incrementally; nothing is buffered beyond one file's content. Read and
/// decode failures are recovered at single-file granularity as inline
/// placeholders, so a bad file never aborts the run. Whatever has been
/// flushed stays on disk even if the run later fails.
pub struct MarkdownWriter<W: Write> {
    config: Config,
    out: W,
    stats: RunStatistics,
    sink: Arc<dyn ProgressSink>,
}

impl MarkdownWriter<BufWriter<File>> {
    /// Create a writer streaming to the configured output file
    pub fn create(config: Config, sink: Arc<dyn ProgressSink>) -> Result<Self> {
        let file = File::create(&config.output_file)?;
        Ok(Self::new(config, BufWriter::new(file), sink))
    }
}

impl<W: Write> MarkdownWriter<W> {
    /// Create a writer streaming to an arbitrary sink
    pub fn new(config: Config, out: W, sink: Arc<dyn ProgressSink>) -> Self {
        Self {
            config,
            out,
            stats: RunStatistics::default(),
            sink,
        }
    }

    /// Run the full pipeline: header, walk, finalization.
    ///
    /// A cancelled walk still finalizes the document, leaving it
    /// well-formed for what was written, and reports cancelled-not-failed.
    pub fn consolidate(&mut self, scanner: &mut Scanner) -> Result<RunSummary> {
        self.write_header()?;

        let outcome = scanner.walk(|event| match event {
            WalkEvent::Directory(dir) => self.write_directory(&dir),
            WalkEvent::File(file) => self.write_file(&file),
        })?;

        self.stats.files_skipped = scanner.files_skipped();
        self.out.flush()?;
        self.sink.notify(ProgressEvent::RunFinished(&self.stats));

        Ok(RunSummary {
            outcome,
            stats: self.stats.clone(),
        })
    }

    /// Statistics accumulated so far
    pub fn statistics(&self) -> &RunStatistics {
        &self.stats
    }

    /// Consume the writer and return the underlying output
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self) -> Result<()> {
        self.out.write_all(b"# Directory Consolidation Report\n\n")?;
        writeln!(
            self.out,
            "**Directory:** `{}`\n",
            self.config.root_dir.display()
        )?;
        writeln!(
            self.out,
            "**Generated:** {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;

        self.out.write_all(b"**Excluded extensions/patterns:**\n")?;
        // BTreeSet union keeps the listing sorted.
        let rules: Vec<&String> = self
            .config
            .extension_exclusions
            .union(&self.config.name_pattern_exclusions)
            .collect();
        for rule in rules.iter().take(20) {
            writeln!(self.out, "- `{}`", rule)?;
        }
        if rules.len() > 20 {
            writeln!(self.out, "- ... and {} more", rules.len() - 20)?;
        }

        write!(self.out, "\n{}\n\n", "=".repeat(50))?;
        Ok(())
    }

    fn write_directory(&mut self, dir: &DirectoryEntry) -> Result<()> {
        // Heading level saturates at Markdown's deepest level.
        let hashes = "#".repeat((dir.depth + 1).min(6));
        write!(
            self.out,
            "\n{} Directory: `{}`\n\n",
            hashes,
            dir.relative_path.display()
        )?;

        if self.config.include_empty_dirs && !dir.subdirectories.is_empty() {
            self.out.write_all(b"**Subdirectories:**\n")?;
            for name in &dir.subdirectories {
                writeln!(self.out, "- `{}`", name)?;
            }
            self.out.write_all(b"\n")?;
        }

        self.stats.directories_visited += 1;
        self.sink
            .notify(ProgressEvent::DirectoryEntered(&dir.relative_path));
        Ok(())
    }

    fn write_file(&mut self, file: &FileEntry) -> Result<()> {
        write!(self.out, "\n### File: `{}`\n\n", file.name)?;
        writeln!(self.out, "**Path:** `{}`", file.relative_path.display())?;
        writeln!(self.out, "**Extension:** `{}`", file.extension)?;
        match file.size {
            Some(size) => write!(
                self.out,
                "**Size:** {} bytes ({:.2} KB)\n\n",
                group_digits(size),
                size as f64 / 1024.0
            )?,
            None => self.out.write_all(b"**Size:** Unknown\n\n")?,
        }

        let classification = Classifier::new(&self.config).classify(&file.extension);
        match classification {
            Classification::Binary { mime } => {
                writeln!(self.out, "*Binary file - {}*", mime.unwrap_or("Unknown type"))?;
            }
            embed => self.write_content(file, embed)?,
        }

        write!(self.out, "\n{}\n", "-".repeat(40))?;

        // Placeholdered files still count as included: their metadata was
        // emitted.
        self.stats.files_included += 1;
        self.stats.bytes_included += file.size.unwrap_or(0);
        self.sink
            .notify(ProgressEvent::FileProcessed(&file.relative_path));
        Ok(())
    }

    /// Embed a text file's content, degrading to an inline placeholder on
    /// read or decode failure. The file handle is scoped to this one read.
    fn write_content(&mut self, file: &FileEntry, classification: Classification) -> Result<()> {
        let bytes = match fs::read(&file.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                let reason = e.to_string();
                writeln!(self.out, "*[Error reading file: {}]*", reason)?;
                self.sink.notify(ProgressEvent::FileIssue {
                    path: &file.relative_path,
                    reason: &reason,
                });
                return Ok(());
            }
        };

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                self.out
                    .write_all(b"*[Content skipped - binary or unsupported encoding]*\n")?;
                self.sink.notify(ProgressEvent::FileIssue {
                    path: &file.relative_path,
                    reason: "binary or unsupported encoding",
                });
                return Ok(());
            }
        };

        match classification {
            Classification::Markdown => {
                self.out.write_all(b"**Content:**\n\n")?;
                self.out.write_all(content.as_bytes())?;
            }
            Classification::Fenced { tag } => {
                writeln!(self.out, "```{}", tag)?;
                self.out.write_all(content.as_bytes())?;
                if !content.ends_with('\n') {
                    self.out.write_all(b"\n")?;
                }
                self.out.write_all(b"```\n")?;
            }
            // Binary files never reach here; the caller writes their label.
            Classification::Binary { .. } => {}
        }

        Ok(())
    }
}
