//! Configuration loaded from `.smellblock.toml`.
//!
//! Command-line flags override the file; `--project-root` also reads the
//! `PROJECT_PATH` environment variable.

mod core;
mod loader;

pub use self::core::{BatchConfig, SmellblockConfig, CONFIG_FILE_NAME};
pub use loader::{directory_ancestors, load_config, load_config_from, parse_and_validate_config};
