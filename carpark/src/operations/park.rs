//! Park operation: slot allocation for an arriving vehicle.

use rusqlite::{Connection, TransactionBehavior};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::slot::{Slot, SlotCategory};
use crate::vehicle::Vehicle;

/// A validated park request.
///
/// # Examples
///
/// ```
/// use carpark::operations::ParkRequest;
///
/// let request = ParkRequest::new("KA-01-1234", "EV").unwrap();
/// assert_eq!(request.license_plate(), "KA-01-1234");
///
/// assert!(ParkRequest::new("  ", "CAR").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkRequest {
    license_plate: String,
    vehicle_type: String,
}

impl ParkRequest {
    /// Creates a park request, validating its fields.
    ///
    /// Both fields are trimmed of surrounding whitespace and must be
    /// non-empty afterwards.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either field is empty.
    pub fn new(license_plate: impl Into<String>, vehicle_type: impl Into<String>) -> Result<Self> {
        let license_plate = license_plate.into().trim().to_string();
        if license_plate.is_empty() {
            return Err(Error::Validation {
                field: "license_plate".into(),
                message: "license plate must be non-empty".into(),
            });
        }

        let vehicle_type = vehicle_type.into().trim().to_string();
        if vehicle_type.is_empty() {
            return Err(Error::Validation {
                field: "vehicle_type".into(),
                message: "vehicle type must be non-empty".into(),
            });
        }

        Ok(Self {
            license_plate,
            vehicle_type,
        })
    }

    /// Returns the license plate.
    #[must_use]
    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    /// Returns the vehicle type.
    #[must_use]
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    /// Returns the reserved category this vehicle type is entitled to,
    /// if any.
    fn preferred_category(&self) -> Option<SlotCategory> {
        match self.vehicle_type.as_str() {
            "EV" => Some(SlotCategory::EvCharging),
            "HANDICAP" => Some(SlotCategory::Handicap),
            _ => None,
        }
    }
}

/// The outcome of a park operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkOutcome {
    /// The vehicle was parked; the slot carries the new occupant.
    Parked(Slot),
    /// A vehicle with this license plate is already parked.
    AlreadyParked,
    /// No slot is available for this vehicle.
    LotFull,
}

/// Parks a vehicle, allocating the first suitable slot.
///
/// Entitled vehicle types (`HANDICAP`, `EV`) first try the lowest-numbered
/// free slot of their reserved category; all vehicles then fall back to
/// the lowest-numbered free unreserved slot. A plate that is already
/// parked is refused, and a lot with no suitable slot reports
/// [`ParkOutcome::LotFull`].
///
/// The duplicate check, slot search, and writes all run in one immediate
/// transaction, so two arrivals cannot claim the same slot and a plate
/// cannot be parked twice by racing callers.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn park(db: &mut Database, request: &ParkRequest) -> Result<ParkOutcome> {
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    if Database::vehicle_exists(&tx, request.license_plate())? {
        tx.commit()?;
        return Ok(ParkOutcome::AlreadyParked);
    }

    let Some(mut slot) = find_slot(&tx, request)? else {
        tx.commit()?;
        return Ok(ParkOutcome::LotFull);
    };

    let vehicle = Vehicle::builder(request.license_plate(), request.vehicle_type(), slot.id())
        .build()?;

    Database::save_vehicle(&tx, &vehicle)?;
    slot.assign(vehicle);
    Database::save_slot(&tx, &slot)?;

    tx.commit()?;

    Ok(ParkOutcome::Parked(slot))
}

fn find_slot(conn: &Connection, request: &ParkRequest) -> Result<Option<Slot>> {
    if let Some(category) = request.preferred_category() {
        if let Some(slot) = Database::find_first_available_by_category(conn, category)? {
            return Ok(Some(slot));
        }
    }
    Database::find_first_available_unreserved(conn)
}
