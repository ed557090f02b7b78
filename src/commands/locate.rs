use crate::cli::OutputFormat;
use crate::core::{LocateReport, Result, TestBlockMatch};
use crate::locator::{locate, LocateOptions};
use anyhow::Context;
use std::path::Path;

/// Run a single locate request and print the outcome to stdout.
///
/// Returns whether a block was found; locator errors are printed, not propagated.
pub fn handle_locate(
    file: &Path,
    line: usize,
    format: OutputFormat,
    options: &LocateOptions,
) -> anyhow::Result<bool> {
    let outcome = locate(file, line, options);
    if let Err(e) = &outcome {
        tracing::info!(file = %file.display(), line, "{}", e);
    }
    println!("{}", render_outcome(&outcome, format)?);
    Ok(outcome.is_ok())
}

pub fn render_outcome(outcome: &Result<TestBlockMatch>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&LocateReport::from(outcome))
            .context("Failed to serialize locate result"),
        OutputFormat::Text => Ok(match outcome {
            Ok(found) => format!("{}\n{}", found.range_label(), found.text),
            Err(e) => format!("Error: {}", e),
        }),
    }
}
