// Export modules for library usage
pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod locator;
pub mod observability;
pub mod source;
pub mod syntax;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{
    BatchError, ErrorKind, Language, LineSpan, LocateError, LocateReport, TestBlockMatch,
};

pub use crate::locator::{
    extract_test_block, find_test_block, format_test_block, is_test_declaration, locate,
    locate_with, LocateOptions, Recognition,
};

pub use crate::source::{SourceDocument, DEFAULT_EXPECT_ERROR_MARKER};

pub use crate::syntax::{parse_document, FunctionForm, SyntaxNode, SyntaxTree};

pub use crate::batch::{run_batch, BatchOptions, BatchSummary};
