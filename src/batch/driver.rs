use super::row::{OutputRow, SmellRow};
use crate::core::{BatchError, ErrorKind, LocateError};
use crate::io::{FileSystem, RealFileSystem};
use crate::locator::{locate_with, LocateOptions};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator, ProgressStyle};
use rayon::prelude::*;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const PROGRESS_TEMPLATE: &str = "{spinner} {msg} [{bar:40}] {pos}/{len} rows ({elapsed})";

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub project_root: PathBuf,
    pub locate: LocateOptions,
    pub parallel: bool,
    pub show_progress: bool,
}

impl BatchOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            locate: LocateOptions::default(),
            parallel: true,
            show_progress: false,
        }
    }
}

/// Per-row outcome counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub matched: usize,
    pub no_match: usize,
    pub malformed: usize,
    pub errors: usize,
}

impl BatchSummary {
    fn record(&mut self, status: RowStatus) {
        self.rows += 1;
        match status {
            RowStatus::Matched => self.matched += 1,
            RowStatus::Failed(ErrorKind::NoMatch) => self.no_match += 1,
            RowStatus::Failed(ErrorKind::MalformedInput) => self.malformed += 1,
            RowStatus::Failed(_) => self.errors += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Matched,
    Failed(ErrorKind),
}

/// An input row, or the reason it could not be decoded.
pub type InputRow = std::result::Result<SmellRow, LocateError>;

/// Read `input`, locate every row and write the results to `output`.
pub fn run_batch(
    input: &Path,
    output: &Path,
    options: &BatchOptions,
) -> Result<BatchSummary, BatchError> {
    let reader = std::fs::File::open(input).map_err(|e| BatchError::Input {
        path: input.to_path_buf(),
        source: e.into(),
    })?;
    let rows = read_rows(reader, input)?;

    let results = process_rows(&RealFileSystem, &rows, options)?;

    let writer = std::fs::File::create(output).map_err(|e| BatchError::Output {
        path: output.to_path_buf(),
        source: e.into(),
    })?;
    write_rows(writer, output, results.iter().map(|(row, _)| row))?;

    Ok(summarize(&results))
}

pub fn read_rows<R: Read>(reader: R, source: &Path) -> Result<Vec<InputRow>, BatchError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<SmellRow>().enumerate() {
        match record {
            Ok(row) => rows.push(Ok(row)),
            Err(e) if e.is_io_error() => {
                return Err(BatchError::Input {
                    path: source.to_path_buf(),
                    source: e,
                })
            }
            Err(e) => {
                warn!(row = index + 1, "Skipping undecodable input row: {}", e);
                rows.push(Err(LocateError::malformed(format!("undecodable row: {e}"))));
            }
        }
    }
    Ok(rows)
}

pub fn write_rows<'a, W: Write>(
    writer: W,
    destination: &Path,
    rows: impl IntoIterator<Item = &'a OutputRow>,
) -> Result<(), BatchError> {
    let to_output_error = |source: csv::Error| BatchError::Output {
        path: destination.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row).map_err(to_output_error)?;
    }
    writer
        .flush()
        .map_err(|e| to_output_error(csv::Error::from(e)))
}

/// Locate every row, preserving input order.
pub fn process_rows<F: FileSystem>(
    fs: &F,
    rows: &[InputRow],
    options: &BatchOptions,
) -> Result<Vec<(OutputRow, RowStatus)>, BatchError> {
    if !fs.is_dir(&options.project_root) {
        return Err(BatchError::InvalidProjectRoot {
            path: options.project_root.clone(),
        });
    }

    let progress = create_progress(rows.len(), options.show_progress);
    let results: Vec<_> = if options.parallel {
        rows.par_iter()
            .progress_with(progress.clone())
            .map(|row| process_row(fs, row, options))
            .collect()
    } else {
        rows.iter()
            .progress_with(progress.clone())
            .map(|row| process_row(fs, row, options))
            .collect()
    };
    progress.finish_and_clear();

    let summary = summarize(&results);
    info!(
        rows = summary.rows,
        matched = summary.matched,
        no_match = summary.no_match,
        malformed = summary.malformed,
        errors = summary.errors,
        "Batch complete"
    );
    Ok(results)
}

fn process_row<F: FileSystem>(
    fs: &F,
    row: &InputRow,
    options: &BatchOptions,
) -> (OutputRow, RowStatus) {
    let row = match row {
        Ok(row) => row,
        Err(e) => return (OutputRow::malformed(None, e), RowStatus::Failed(e.kind())),
    };
    debug!(?row, "Processing row");

    let path = match row.resolve_path(&options.project_root) {
        Ok(path) => path,
        Err(e) => return (OutputRow::malformed(None, &e), RowStatus::Failed(e.kind())),
    };
    let line = match row.target_line() {
        Ok(line) => line,
        Err(e) => {
            debug!(path = %path.display(), "Error processing row: {}", e);
            return (
                OutputRow::malformed(Some(&path), &e),
                RowStatus::Failed(e.kind()),
            );
        }
    };

    match locate_with(fs, &path, line, &options.locate) {
        Ok(found) => (OutputRow::matched(&path, &found), RowStatus::Matched),
        Err(e) => {
            debug!(path = %path.display(), line, "{}", e);
            (OutputRow::failed(&path, &e), RowStatus::Failed(e.kind()))
        }
    }
}

fn summarize(results: &[(OutputRow, RowStatus)]) -> BatchSummary {
    results
        .iter()
        .fold(BatchSummary::default(), |mut summary, (_, status)| {
            summary.record(*status);
            summary
        })
}

fn create_progress(len: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  "),
    );
    bar.set_message("Locating test blocks");
    bar
}
