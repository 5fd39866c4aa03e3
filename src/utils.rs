/*!
 * Utility functions and default rule sets for dirparse
 */

use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use walkdir::WalkDir;

use crate::config::Config;
use crate::policy::{EntryKind, ExclusionPolicy};

/// Count the files a run would include, for progress tracking.
///
/// This is a sizing pre-pass for the progress bar; the run proper evaluates
/// the policy independently.
pub fn count_files(dir: &Path, config: &Config) -> io::Result<u64> {
    let dir = fs::canonicalize(dir)?;
    let output_file = fs::canonicalize(&config.output_file).ok();
    let policy = ExclusionPolicy::new(config.clone());
    let mut count = 0;

    let walker = WalkDir::new(&dir).min_depth(1).into_iter().filter_entry(|e| {
        !e.file_type().is_dir() || !policy.is_excluded(e.path(), EntryKind::Directory)
    });

    for entry in walker.filter_map(Result::ok) {
        if entry.file_type().is_file() {
            // A report left over from an earlier run never counts itself
            if output_file.as_deref().map_or(false, |out| entry.path() == out) {
                continue;
            }
            let size = entry.metadata().ok().map(|m| m.len());
            if !policy.is_excluded(entry.path(), EntryKind::File { size }) {
                count += 1;
            }
        }
    }

    Ok(count)
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Group a byte count with thousands separators, e.g. `1,048,576`
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Shorten a file name for display to at most `max_chars` characters,
/// keeping the tail. Cuts on character boundaries, so multibyte names
/// are safe.
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    let total = name.chars().count();
    if total <= max_chars {
        return name.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let start = name
        .char_indices()
        .nth(total - keep)
        .map(|(i, _)| i)
        .unwrap_or(0);
    format!("...{}", &name[start..])
}

/// Lowercase extension with leading dot, empty string when there is none
pub fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Extensions excluded from the report by default
pub static DEFAULT_EXCLUDED_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Media
        ".mp3", ".mp4", ".avi", ".mov", ".mkv", ".flv", ".wmv", ".m4v",
        ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp", ".ico",
        ".svg", ".psd", ".ai", ".eps",
        // Documents
        ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".odt",
        // Archives
        ".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz",
        // Executables and binaries
        ".exe", ".dll", ".so", ".dylib", ".bin", ".app", ".msi",
        ".iso", ".img", ".dmg",
        // System files
        ".db", ".sqlite", ".sqlite3", ".log", ".tmp", ".temp",
        // Other
        ".pyc", ".pyo", "__pycache__", ".git", ".gitignore",
    ]
});

/// Extensions whose content is embedded as text by default
pub static DEFAULT_TEXT_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".txt", ".md", ".markdown", ".rst", ".json", ".xml", ".html", ".htm",
        ".css", ".js", ".jsx", ".ts", ".tsx", ".py", ".java", ".c", ".cpp",
        ".h", ".hpp", ".cs", ".php", ".rb", ".go", ".rs", ".swift", ".kt",
        ".sql", ".sh", ".bash", ".zsh", ".ps1", ".bat", ".yml", ".yaml",
        ".toml", ".ini", ".cfg", ".conf", ".csv", ".tsv", ".tex", ".bib",
        ".asm", ".s", ".v", ".vhdl", ".m", ".mm", ".f", ".for", ".f90",
        ".r", ".lua", ".pl", ".pm", ".tcl", ".vbs", ".asp", ".aspx",
        ".jsp", ".scala", ".dart", ".elm", ".clj", ".cljs", ".erl", ".hrl",
        ".ex", ".exs", ".fs", ".fsx", ".fsi", ".ml", ".mli", ".hs", ".lhs",
        ".purs", ".coffee", ".litcoffee", ".ass", ".vue", ".svelte",
    ]
});
