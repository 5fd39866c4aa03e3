/*!
 * Command-line interface for dirparse
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use dirparse::config::{Args, Config};
use dirparse::progress::{CancelToken, ProgressEvent, ProgressSink};
use dirparse::report::{ReportFormat, Reporter, RunReport};
use dirparse::scanner::Scanner;
use dirparse::utils::{count_files, truncate_name};
use dirparse::writer::MarkdownWriter;

/// Adapts the pipeline's progress events onto an indicatif bar
struct ProgressBarSink {
    bar: ProgressBar,
}

impl ProgressSink for ProgressBarSink {
    fn notify(&self, event: ProgressEvent<'_>) {
        match event {
            ProgressEvent::DirectoryEntered(path) => {
                self.bar.set_message(format!("Directory: {}", path.display()));
            }
            ProgressEvent::FileProcessed(path) => {
                self.bar.inc(1);
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                // Truncate long names to avoid display issues
                let display_name = truncate_name(&name, 40);
                self.bar.set_message(format!("Current file: {}", display_name));
            }
            ProgressEvent::EntrySkipped(_) => {}
            ProgressEvent::FileIssue { path, reason } => {
                self.bar
                    .println(format!("Warning: {}: {}", path.display(), reason));
            }
            ProgressEvent::RunFinished(_) => {}
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> dirparse::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Create and validate configuration; failures here are fatal and
    // happen before any output file is touched
    let config = Config::from_args(args);
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("Consolidating");
    progress.set_message(format!("Scanning directory: {}", config.root_dir.display()));

    // Count files for progress tracking
    match count_files(&config.root_dir, &config) {
        Ok(count) => {
            progress.set_message(format!("Found {} files to process", count));
            progress.set_length(count);
        }
        Err(e) => progress.set_message(format!("Warning: failed to count files: {}", e)),
    }

    let sink: Arc<dyn ProgressSink> = Arc::new(ProgressBarSink {
        bar: progress.clone(),
    });

    // Create scanner and writer. The cancel token is exposed so an
    // embedding caller can stop the run at a directory boundary; the CLI
    // itself runs to completion.
    let cancel = CancelToken::new();
    let mut scanner = Scanner::new(config.clone(), cancel, Arc::clone(&sink));
    let mut writer = MarkdownWriter::create(config.clone(), Arc::clone(&sink))?;

    let start_time = Instant::now();
    let summary = writer.consolidate(&mut scanner)?;
    let duration = start_time.elapsed();

    progress.finish_and_clear();

    // Print the final summary table
    let report = RunReport {
        output_file: config.output_file.display().to_string(),
        duration,
        outcome: summary.outcome,
        stats: summary.stats,
    };
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    Ok(())
}
