use anyhow::Result;
use clap::Parser;
use smellblock::cli::setup::run_with_main_stack;
use smellblock::cli::{Cli, Commands};
use smellblock::commands::{handle_batch, handle_locate, init_config, BatchCommandConfig};
use smellblock::config::load_config;
use smellblock::locator::LocateOptions;
use smellblock::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    run_with_main_stack(move || run(cli))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Locate {
            file,
            line,
            format,
            marker,
        } => {
            let config = load_config();
            let options = LocateOptions {
                marker: marker.unwrap_or(config.expect_error_marker),
            };
            if !handle_locate(&file, line, format, &options)? {
                std::process::exit(1);
            }
        }
        Commands::Batch {
            input,
            output,
            project_root,
            jobs,
            no_parallel,
            marker,
        } => {
            let config = load_config();
            let command = BatchCommandConfig {
                input,
                output,
                project_root,
                jobs,
                no_parallel,
                marker,
            };
            handle_batch(command, &config)?;
        }
        Commands::Init { force } => init_config(force)?,
    }

    Ok(())
}
