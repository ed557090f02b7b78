use crate::source::DEFAULT_EXPECT_ERROR_MARKER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".smellblock.toml";

fn default_marker() -> String {
    DEFAULT_EXPECT_ERROR_MARKER.to_string()
}

fn default_parallel() -> bool {
    true
}

/// Root configuration structure for smellblock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmellblockConfig {
    /// Directory holding one checkout per analysed repository
    #[serde(default)]
    pub project_root: Option<PathBuf>,

    /// Token stripped from sources before parsing
    #[serde(default = "default_marker")]
    pub expect_error_marker: String,

    #[serde(default)]
    pub batch: BatchConfig,
}

impl Default for SmellblockConfig {
    fn default() -> Self {
        Self {
            project_root: None,
            expect_error_marker: default_marker(),
            batch: BatchConfig::default(),
        }
    }
}

impl SmellblockConfig {
    /// Project root from the command line (or `PROJECT_PATH`), falling back to the config file.
    pub fn resolve_project_root(&self, cli_root: Option<&Path>) -> Option<PathBuf> {
        cli_root
            .map(Path::to_path_buf)
            .or_else(|| self.project_root.clone())
    }
}

/// Parallelism settings for batch runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Process rows on the rayon pool (default: true)
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Worker threads; 0 uses every available core
    #[serde(default)]
    pub jobs: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            jobs: 0,
        }
    }
}
