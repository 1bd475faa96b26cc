//! Park command implementation.
//!
//! This module implements the `park` command, which allocates the first
//! suitable slot for an arriving vehicle.

use clap::Args;

use carpark::{park, seed_lot, ParkOutcome, ParkRequest};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Park a vehicle in the first suitable slot.
#[derive(Args)]
pub struct ParkCommand {
    /// License plate of the arriving vehicle
    #[arg(value_name = "PLATE")]
    pub license_plate: String,

    /// Vehicle type (CAR, EV, HANDICAP, ...)
    #[arg(long, value_name = "TYPE", default_value = "CAR")]
    pub vehicle_type: String,
}

impl ParkCommand {
    /// Execute the park command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let request = ParkRequest::new(self.license_plate, self.vehicle_type)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        if !global.disable_autoinit {
            seed_lot(&mut db, &config.lot).map_err(CliError::from)?;
        }

        match park(&mut db, &request).map_err(CliError::from)? {
            ParkOutcome::Parked(slot) => {
                if !global.quiet {
                    println!(
                        "Parked {} at {} ({})",
                        request.license_plate(),
                        slot.id(),
                        slot.category()
                    );
                }
                Ok(())
            }
            ParkOutcome::AlreadyParked => Err(CliError::Refused(format!(
                "Vehicle {} is already parked",
                request.license_plate()
            ))),
            ParkOutcome::LotFull => Err(CliError::Refused(format!(
                "No slot available for vehicle {}",
                request.license_plate()
            ))),
        }
    }
}
