//! CLI command implementations.
//!
//! - **locate**: print the test block enclosing one line of one file
//! - **batch**: resolve every row of a smell dataset into an output CSV
//! - **init**: write a default `.smellblock.toml`

pub mod batch;
pub mod init;
pub mod locate;

pub use batch::{handle_batch, BatchCommandConfig};
pub use init::init_config;
pub use locate::{handle_locate, render_outcome};
