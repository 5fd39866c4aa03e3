/*!
 * Configuration handling for dirparse
 */

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::utils::{DEFAULT_EXCLUDED_EXTENSIONS, DEFAULT_TEXT_EXTENSIONS};

/// Command-line arguments for dirparse
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirparse",
    version = env!("CARGO_PKG_VERSION"),
    about = "Consolidate a directory tree into a single Markdown report",
    long_about = "Walks a directory tree, filters entries through configurable exclusion rules, and writes the surviving files (path, size, and full content for recognized text types) into one structured Markdown report."
)]
pub struct Args {
    /// Directory to consolidate
    #[clap(required_unless_present = "generate")]
    pub directory: Option<String>,

    /// Output Markdown file (a missing .md suffix is appended)
    #[clap(default_value = "directory_consolidated.md")]
    pub output_file: String,

    /// Include hidden files and directories (names starting with '.')
    #[clap(long)]
    pub include_hidden: bool,

    /// Emit headings for directories with no surviving content
    #[clap(long)]
    pub include_empty_dirs: bool,

    /// Maximum file size to include, in MiB
    #[clap(long, default_value = "10", value_name = "MB")]
    pub max_file_size: u64,

    /// Comma-separated extensions to exclude in addition to the defaults
    #[clap(long, value_delimiter = ',')]
    pub exclude_extensions: Vec<String>,

    /// Comma-separated name patterns to exclude (substring match on the path)
    #[clap(long, value_delimiter = ',')]
    pub exclude_patterns: Vec<String>,

    /// Comma-separated extensions to treat as text in addition to the defaults
    #[clap(long, value_delimiter = ',')]
    pub text_extensions: Vec<String>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Immutable configuration for one consolidation run
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to consolidate
    pub root_dir: PathBuf,

    /// Output Markdown file path
    pub output_file: PathBuf,

    /// Include hidden files and directories
    pub include_hidden: bool,

    /// Emit headings for directories with no surviving content
    pub include_empty_dirs: bool,

    /// Maximum included file size in bytes
    pub max_file_size: u64,

    /// Lowercase extensions (leading dot) excluded from the report
    pub extension_exclusions: BTreeSet<String>,

    /// Substring patterns excluded from the report; dot-initial entries
    /// act as extension rules
    pub name_pattern_exclusions: BTreeSet<String>,

    /// Lowercase extensions whose content is embedded as text
    pub text_extensions: BTreeSet<String>,
}

/// Normalize a user-supplied extension: prepend the dot, lowercase
fn normalize_extension(raw: &str) -> String {
    let raw = raw.trim().to_lowercase();
    if raw.starts_with('.') {
        raw
    } else {
        format!(".{}", raw)
    }
}

impl Config {
    /// Configuration with the default rule sets
    pub fn new(root_dir: PathBuf, output_file: PathBuf) -> Self {
        Self {
            root_dir,
            output_file,
            include_hidden: false,
            include_empty_dirs: false,
            max_file_size: 10 * 1024 * 1024,
            extension_exclusions: DEFAULT_EXCLUDED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            name_pattern_exclusions: BTreeSet::new(),
            text_extensions: DEFAULT_TEXT_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mut output_file = args.output_file;
        if !output_file.ends_with(".md") {
            output_file.push_str(".md");
        }

        let mut config = Self::new(
            PathBuf::from(args.directory.unwrap_or_default()),
            PathBuf::from(output_file),
        );

        config.include_hidden = args.include_hidden;
        config.include_empty_dirs = args.include_empty_dirs;
        // Saturate so an absurd megabyte count means "no effective limit"
        // instead of an arithmetic overflow.
        config.max_file_size = args.max_file_size.saturating_mul(1024 * 1024);

        for ext in &args.exclude_extensions {
            config.extension_exclusions.insert(normalize_extension(ext));
        }
        for pattern in &args.exclude_patterns {
            config
                .name_pattern_exclusions
                .insert(pattern.trim().to_string());
        }
        for ext in &args.text_extensions {
            config.text_extensions.insert(normalize_extension(ext));
        }

        config
    }

    /// Validate the configuration; failures here are fatal and pre-run
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.root_dir.exists() && self.root_dir.is_dir(),
            Config,
            "Target directory not found: {}",
            self.root_dir.display()
        );

        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent == PathBuf::from("") || parent.exists(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        ensure!(
            self.max_file_size > 0,
            Config,
            "Maximum file size must be positive"
        );

        Ok(())
    }
}
