//! Loading source files into an immutable, line-indexed document.

use crate::core::{Language, LocateError, Result};
use crate::io::{FileSystem, RealFileSystem};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Token used by Flow test fixtures to flag expected type errors.
pub const DEFAULT_EXPECT_ERROR_MARKER: &str = "$ExpectError";

/// Full text of one source file plus a 1-indexed line view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: PathBuf,
    language: Language,
    text: String,
    lines: Vec<String>,
}

impl SourceDocument {
    /// Build a document from text already in memory, stripping `marker`.
    pub fn from_source(path: impl Into<PathBuf>, text: &str, marker: &str) -> Self {
        let path = path.into();
        let text = strip_marker(&normalize_line_breaks(text), marker);
        let lines = text.lines().map(str::to_owned).collect();
        Self {
            language: Language::from_path(&path),
            path,
            text,
            lines,
        }
    }

    pub fn load(path: &Path, marker: &str) -> Result<Self> {
        Self::load_with(&RealFileSystem, path, marker)
    }

    pub fn load_with<F: FileSystem + ?Sized>(fs: &F, path: &Path, marker: &str) -> Result<Self> {
        if !fs.exists(path) {
            return Err(LocateError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs
            .read_to_string(path)
            .map_err(|e| LocateError::from_io(path, e))?;
        Ok(Self::from_source(path, &text, marker))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line `number` (1-indexed), without its terminator.
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// Lines `start..=end` (1-indexed) joined with `\n`.
    ///
    /// Returns `None` when the range is empty or reaches past the last line.
    pub fn slice_lines(&self, start: usize, end: usize) -> Option<String> {
        if start == 0 || start > end || end > self.lines.len() {
            return None;
        }
        Some(self.lines[start - 1..end].join("\n"))
    }
}

/// Rewrite `\r\n` and lone `\r` terminators as `\n`, keeping the line count.
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Remove every occurrence of `marker`. Line breaks are never touched.
pub fn strip_marker(text: &str, marker: &str) -> String {
    if marker.is_empty() || marker.contains('\n') {
        return text.to_string();
    }
    text.replace(marker, "")
}
