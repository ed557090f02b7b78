pub mod setup;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smellblock")]
#[command(
    about = "Locate the test blocks that enclose code-smell positions in JavaScript test suites",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the test declaration enclosing a line of a source file
    Locate {
        /// JavaScript or TypeScript source file
        file: PathBuf,

        /// 1-indexed target line
        line: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Token stripped from the source before parsing
        #[arg(long)]
        marker: Option<String>,
    },

    /// Resolve every row of a smell dataset and write the located blocks as CSV
    Batch {
        /// Input CSV with Repository, File and Lines columns
        input: PathBuf,

        /// Output CSV
        output: PathBuf,

        /// Directory containing one checkout per repository
        #[arg(long = "project-root", env = "PROJECT_PATH")]
        project_root: Option<PathBuf>,

        /// Number of worker threads (0 = use all cores)
        #[arg(short = 'j', long = "jobs")]
        jobs: Option<usize>,

        /// Process rows sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Token stripped from sources before parsing
        #[arg(long)]
        marker: Option<String>,
    },

    /// Initialize a new .smellblock.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
