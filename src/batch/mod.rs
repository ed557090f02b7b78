//! Batch processing of smell datasets.
//!
//! Each input row names a repository, a file inside it and a serialized
//! position. Rows are independent: a row that cannot be interpreted, points
//! at a missing file or has no enclosing test block produces an error row and
//! the batch carries on. Only an unreadable input, an unwritable output or an
//! invalid project root stop the run.

pub mod descriptor;
pub mod driver;
pub mod row;

pub use descriptor::parse_target_line;
pub use driver::{
    process_rows, read_rows, run_batch, write_rows, BatchOptions, BatchSummary, InputRow,
    RowStatus,
};
pub use row::{OutputRow, SmellRow, INVALID_FILE_PATH};
