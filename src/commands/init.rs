use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Smellblock Configuration

# Directory holding one checkout per analysed repository.
# Overridden by --project-root or the PROJECT_PATH environment variable.
# project_root = "/path/to/projects"

# Token removed from sources before parsing (Flow fixture annotations)
expect_error_marker = "$ExpectError"

[batch]
parallel = true
# 0 uses every available core
jobs = 0
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)
}
