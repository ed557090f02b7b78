//! Testing helpers for driving the locator without touching disk.
//!
//! [`MemoryFileSystem`] implements [`FileSystem`] over an in-memory map so
//! loader and batch tests can set up fixture trees with a fluent API:
//!
//! ```rust
//! use smellblock::testkit::MemoryFileSystem;
//! use smellblock::io::FileSystem;
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new()
//!     .with_file("/projects/app/test/a.test.js", "it('a', () => {});");
//!
//! assert!(fs.exists(Path::new("/projects/app/test/a.test.js")));
//! assert!(fs.is_dir(Path::new("/projects/app")));
//! ```

use crate::io::FileSystem;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn with_files<'a>(mut self, files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (path, content) in files {
            self.files.insert(PathBuf::from(path), content.to_string());
        }
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not in memory file system", path.display()),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .keys()
            .any(|file| file != path && file.starts_with(path))
    }
}
