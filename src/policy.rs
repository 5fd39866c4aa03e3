/*!
 * Exclusion policy: decides whether a path is omitted from the report
 */

use std::path::Path;

use crate::config::Config;

/// What kind of entry a path refers to.
///
/// The caller supplies the best-effort size so the policy itself performs
/// no I/O: a failed size lookup arrives as `None` and is fail-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File { size: Option<u64> },
}

/// Pure exclusion decision over `(path, kind, Config)`.
///
/// Directories are only ever pruned by the hidden and name-pattern rules,
/// never by extension or size, so the walk cost stays bounded by directory
/// count and excluded subtrees are never entered.
pub struct ExclusionPolicy {
    config: Config,
}

impl ExclusionPolicy {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// First match wins, in this order: hidden component, name-pattern
    /// substring, extension set (files only), size limit (files only).
    pub fn is_excluded(&self, path: &Path, kind: EntryKind) -> bool {
        let name = path.file_name().unwrap_or_default().to_string_lossy();

        if !self.config.include_hidden && name.starts_with('.') {
            return true;
        }

        // Substring containment against the path's full string form.
        // This is intentionally loose: a pattern `log` also matches
        // `catalog.txt`. Dot-initial patterns are extension rules and
        // are handled below.
        let path_str = path.to_string_lossy();
        for pattern in &self.config.name_pattern_exclusions {
            if !pattern.starts_with('.') && path_str.contains(pattern.as_str()) {
                return true;
            }
        }

        if let EntryKind::File { size } = kind {
            let extension = crate::utils::lowercase_extension(path);
            if !extension.is_empty() {
                if self.config.extension_exclusions.contains(&extension) {
                    return true;
                }
                if self.config.name_pattern_exclusions.contains(&extension) {
                    return true;
                }
            }

            // Fail-open: unknown size never excludes.
            if let Some(size) = size {
                if size > self.config.max_file_size {
                    return true;
                }
            }
        }

        false
    }
}
