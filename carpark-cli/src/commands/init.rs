//! Init command implementation.
//!
//! This module implements the `init` command for explicitly creating the
//! carpark database and seeding the slot inventory.

use clap::Args;

use carpark::seed_lot;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Initialize the lot with its slot inventory.
#[derive(Args)]
pub struct InitCommand {}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Seeding needs a database, so auto-init always applies here
        let seeding_global = GlobalOptions {
            disable_autoinit: false,
            ..global.clone()
        };

        let config = load_configuration(global)?;
        let mut db = open_database(&seeding_global, &config)?;

        let result = seed_lot(&mut db, &config.lot).map_err(CliError::from)?;

        if !global.quiet {
            if result.seeded {
                println!("Initialized lot with {} slots", result.slot_count);
            } else {
                println!("Lot already initialized ({} slots)", result.slot_count);
            }
        }

        Ok(())
    }
}
