/*!
 * Content classification: text-vs-binary and code-fence tagging
 */

use crate::config::Config;

/// How a file's content should appear in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Already Markdown; embedded raw, without a code fence
    Markdown,
    /// Text; embedded inside a fence tagged with the extension sans dot
    Fenced { tag: String },
    /// Not embedded; only metadata plus a best-effort MIME label
    Binary { mime: Option<&'static str> },
}

/// Classifies files by extension against the configured text set
pub struct Classifier<'a> {
    config: &'a Config,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Classify a lowercase dotted extension (`".rs"`, `""`, ...).
    ///
    /// Membership in the text set is case-insensitive; everything outside
    /// it is binary. Markdown extensions are special-cased so their
    /// content renders directly instead of inside a fence.
    pub fn classify(&self, extension: &str) -> Classification {
        let extension = extension.to_lowercase();
        if self.config.text_extensions.contains(&extension) {
            if extension == ".md" || extension == ".markdown" {
                Classification::Markdown
            } else {
                Classification::Fenced {
                    tag: extension.trim_start_matches('.').to_string(),
                }
            }
        } else {
            Classification::Binary {
                mime: mime_label(&extension),
            }
        }
    }
}

/// Best-effort MIME label for a dotted extension, display purposes only
pub fn mime_label(extension: &str) -> Option<&'static str> {
    let mime = match extension {
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".bmp" => "image/bmp",
        ".tiff" => "image/tiff",
        ".webp" => "image/webp",
        ".ico" => "image/vnd.microsoft.icon",
        ".svg" => "image/svg+xml",
        ".mp3" => "audio/mpeg",
        ".mp4" => "video/mp4",
        ".avi" => "video/x-msvideo",
        ".mov" => "video/quicktime",
        ".mkv" => "video/x-matroska",
        ".pdf" => "application/pdf",
        ".doc" => "application/msword",
        ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".xls" => "application/vnd.ms-excel",
        ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".zip" => "application/zip",
        ".tar" => "application/x-tar",
        ".gz" => "application/gzip",
        ".7z" => "application/x-7z-compressed",
        ".rar" => "application/vnd.rar",
        ".exe" => "application/x-msdownload",
        ".dll" => "application/x-msdownload",
        ".so" => "application/octet-stream",
        ".bin" => "application/octet-stream",
        ".iso" => "application/x-iso9660-image",
        ".sqlite" | ".sqlite3" | ".db" => "application/vnd.sqlite3",
        ".wasm" => "application/wasm",
        ".ttf" => "font/ttf",
        ".otf" => "font/otf",
        ".woff" => "font/woff",
        ".woff2" => "font/woff2",
        _ => return None,
    };
    Some(mime)
}
