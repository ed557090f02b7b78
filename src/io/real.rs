//! Production implementation of [`FileSystem`].

use crate::io::traits::FileSystem;
use std::fs;
use std::path::Path;

/// Production file system implementation.
///
/// Delegates directly to `std::fs`. It is stateless and can be shared
/// across batch worker threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
