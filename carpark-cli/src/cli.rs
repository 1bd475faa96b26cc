//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{InitCommand, ParkCommand, StatusCommand, UnparkCommand};

/// Command-line tool for tracking parking lot occupancy.
#[derive(Parser)]
#[command(name = "carpark")]
#[command(version, about = "Track parking lot occupancy", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "CARPARK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to a configuration file
    #[arg(long, value_name = "PATH", global = true, env = "CARPARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "CARPARK_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "CARPARK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the lot with its slot inventory
    Init(InitCommand),

    /// Park a vehicle in the first suitable slot
    Park(ParkCommand),

    /// Release the vehicle parked in a slot
    Unpark(UnparkCommand),

    /// Show the full slot inventory
    Status(StatusCommand),
}
