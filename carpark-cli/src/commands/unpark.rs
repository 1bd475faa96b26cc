//! Unpark command implementation.
//!
//! This module implements the `unpark` command, which releases the
//! vehicle parked in a given slot.

use clap::Args;

use carpark::{unpark, SlotId, UnparkOutcome};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Release the vehicle parked in a slot.
#[derive(Args)]
pub struct UnparkCommand {
    /// Slot identifier (e.g. S42)
    #[arg(value_name = "SLOT")]
    pub slot: String,
}

impl UnparkCommand {
    /// Execute the unpark command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let slot_id: SlotId = self
            .slot
            .parse()
            .map_err(|e: carpark::slot::InvalidSlotIdError| {
                CliError::InvalidArguments(e.to_string())
            })?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        match unpark(&mut db, slot_id).map_err(CliError::from)? {
            UnparkOutcome::Released { license_plate } => {
                if !global.quiet {
                    println!("Released {slot_id} (vehicle {license_plate} departed)");
                }
                Ok(())
            }
            UnparkOutcome::InvalidOrEmptySlot => Err(CliError::Refused(format!(
                "Slot {slot_id} is not occupied or does not exist"
            ))),
        }
    }
}
