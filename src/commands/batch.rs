use crate::batch::{run_batch, BatchOptions, BatchSummary};
use crate::cli::setup::{configure_thread_pool, get_worker_count};
use crate::config::SmellblockConfig;
use crate::core::BatchError;
use crate::locator::LocateOptions;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct BatchCommandConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub project_root: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub no_parallel: bool,
    pub marker: Option<String>,
}

/// Merge command-line flags over the loaded configuration.
pub fn build_batch_options(
    command: &BatchCommandConfig,
    config: &SmellblockConfig,
) -> std::result::Result<BatchOptions, BatchError> {
    let project_root = config
        .resolve_project_root(command.project_root.as_deref())
        .ok_or(BatchError::MissingProjectRoot)?;

    Ok(BatchOptions {
        project_root,
        locate: LocateOptions {
            marker: command
                .marker
                .clone()
                .unwrap_or_else(|| config.expect_error_marker.clone()),
        },
        parallel: config.batch.parallel && !command.no_parallel,
        show_progress: true,
    })
}

pub fn handle_batch(command: BatchCommandConfig, config: &SmellblockConfig) -> Result<BatchSummary> {
    let options = build_batch_options(&command, config)?;

    if options.parallel {
        let jobs = command.jobs.unwrap_or(config.batch.jobs);
        configure_thread_pool(jobs);
        info!(workers = get_worker_count(jobs), "Processing rows in parallel");
    }

    let summary = run_batch(&command.input, &command.output, &options)
        .with_context(|| format!("Batch run on {} failed", command.input.display()))?;

    println!("Results written to {}", command.output.display());
    Ok(summary)
}
