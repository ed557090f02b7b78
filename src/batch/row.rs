use super::descriptor::parse_target_line;
use crate::core::{LocateError, Result, TestBlockMatch};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder written in the filename column when no path could be built.
pub const INVALID_FILE_PATH: &str = "Invalid file path";

/// One row of the smell dataset. Columns other than these three are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmellRow {
    #[serde(rename = "Repository")]
    pub repository: Option<String>,
    #[serde(rename = "File")]
    pub file: Option<String>,
    #[serde(rename = "Lines")]
    pub lines: Option<String>,
}

impl SmellRow {
    /// `<project_root>/<repository short name>/<file fragment>`.
    pub fn resolve_path(&self, project_root: &Path) -> Result<PathBuf> {
        let repository = non_empty(self.repository.as_deref())
            .ok_or_else(|| LocateError::malformed("missing \"Repository\" field"))?;
        let file = non_empty(self.file.as_deref())
            .ok_or_else(|| LocateError::malformed("missing \"File\" field"))?;

        let short_name = repository
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| LocateError::malformed(format!("invalid repository {repository:?}")))?;
        let fragment = file.trim_start_matches(['/', '\\']);

        Ok(project_root.join(short_name).join(fragment))
    }

    pub fn target_line(&self) -> Result<usize> {
        parse_target_line(self.lines.as_deref().unwrap_or_default())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// One row of the output dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "A (filename)")]
    pub filename: String,
    #[serde(rename = "B (test)")]
    pub test: String,
    #[serde(rename = "C (start: ... end: ....)")]
    pub range: String,
}

impl OutputRow {
    pub fn matched(path: &Path, found: &TestBlockMatch) -> Self {
        Self {
            filename: path.display().to_string(),
            test: found.text.clone(),
            range: found.range_label(),
        }
    }

    pub fn failed(path: &Path, error: &LocateError) -> Self {
        Self {
            filename: path.display().to_string(),
            test: error.to_string(),
            range: String::new(),
        }
    }

    /// Row that could not be interpreted; `path` is known only if the path columns were valid.
    pub fn malformed(path: Option<&Path>, error: &LocateError) -> Self {
        Self {
            filename: path
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| INVALID_FILE_PATH.to_string()),
            test: format!("Error: {}", error),
            range: String::new(),
        }
    }
}
