//! Main entry point for the carpark CLI.
//!
//! This is the command-line interface for the carpark occupancy tracker.
//! It provides commands for managing the lot:
//! - `init`: Initialize the lot with its slot inventory
//! - `park`: Park a vehicle in the first suitable slot
//! - `unpark`: Release the vehicle parked in a slot
//! - `status`: Show the full slot inventory

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = carpark::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        config_file: cli.config,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Park(cmd) => cmd.execute(&global),
        cli::Command::Unpark(cmd) => cmd.execute(&global),
        cli::Command::Status(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
