//! I/O trait definitions for source loading.
//!
//! The locator itself is pure; reading files happens at the boundary through
//! [`FileSystem`] so the loader can be driven from memory in tests.

use std::path::Path;

/// File system operations needed to load sources and validate roots.
///
/// Implementations must be `Send + Sync` so batch rows can be processed on
/// several threads at once.
pub trait FileSystem: Send + Sync {
    /// Read a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error with kind `NotFound` when the file doesn't exist, and
    /// the underlying error for permission or encoding failures.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
