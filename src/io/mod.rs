pub mod real;
pub mod traits;

pub use real::RealFileSystem;
pub use traits::FileSystem;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
