/*!
 * End-of-run console reporting
 *
 * Renders the final run counters with the tabled library for clean,
 * consistent table output.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::{RunOutcome, RunStatistics};
use crate::utils::format_file_size;

/// Everything the caller is told once a run ends
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Output file path
    pub output_file: String,
    /// Wall-clock time for the whole run
    pub duration: Duration,
    /// Whether the run completed or was cancelled
    pub outcome: RunOutcome,
    /// Final counters
    pub stats: RunStatistics,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string for the run
    pub fn generate_report(&self, report: &RunReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &RunReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn generate_console_report(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let status = match report.outcome {
            RunOutcome::Completed => "Completed",
            RunOutcome::Cancelled => "Cancelled (partial output)",
        };

        let rows = vec![
            SummaryRow {
                key: "Status".to_string(),
                value: status.to_string(),
            },
            SummaryRow {
                key: "Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "Directories Visited".to_string(),
                value: self.format_number(report.stats.directories_visited),
            },
            SummaryRow {
                key: "Files Included".to_string(),
                value: self.format_number(report.stats.files_included),
            },
            SummaryRow {
                key: "Files Skipped".to_string(),
                value: self.format_number(report.stats.files_skipped),
            },
            SummaryRow {
                key: "Content Size".to_string(),
                value: format_file_size(report.stats.bytes_included),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        let title = match report.outcome {
            RunOutcome::Completed => "CONSOLIDATION COMPLETE",
            RunOutcome::Cancelled => "CONSOLIDATION CANCELLED",
        };

        format!("{}\n{}", title, table)
    }
}
