//! Vehicle types for tracking parked vehicles.
//!
//! A vehicle record exists exactly while its license plate is parked
//! somewhere in the lot: it is created by a successful park operation and
//! deleted when the vehicle departs.

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::slot::SlotId;

/// A parked vehicle with its session metadata.
///
/// Vehicles are identified by license plate and carry a free-form vehicle
/// type (for example `CAR`, `HANDICAP`, `EV`, `MOTORCYCLE`), the time they
/// entered the lot, and the slot they occupy.
///
/// # Examples
///
/// ```
/// use carpark::{SlotId, Vehicle};
///
/// let slot = SlotId::new(11).unwrap();
/// let vehicle = Vehicle::builder("KA-05-9921", "CAR", slot).build().unwrap();
///
/// assert_eq!(vehicle.license_plate(), "KA-05-9921");
/// assert_eq!(vehicle.vehicle_type(), "CAR");
/// assert_eq!(vehicle.assigned_slot(), slot);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    license_plate: String,
    vehicle_type: String,
    entry_time: SystemTime,
    assigned_slot: SlotId,
}

impl Vehicle {
    /// Creates a new vehicle builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use carpark::{SlotId, Vehicle};
    ///
    /// let slot = SlotId::new(1).unwrap();
    /// let vehicle = Vehicle::builder("MH-12-0001", "HANDICAP", slot)
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder(
        license_plate: impl Into<String>,
        vehicle_type: impl Into<String>,
        assigned_slot: SlotId,
    ) -> VehicleBuilder {
        VehicleBuilder {
            license_plate: license_plate.into(),
            vehicle_type: vehicle_type.into(),
            assigned_slot,
            entry_time: None,
        }
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

    /// Returns the time the vehicle entered the lot.
    #[must_use]
    pub const fn entry_time(&self) -> SystemTime {
        self.entry_time
    }

    /// Returns the slot this vehicle occupies.
    #[must_use]
    pub const fn assigned_slot(&self) -> SlotId {
        self.assigned_slot
    }
}

/// Builder for creating [`Vehicle`] instances.
#[derive(Debug)]
pub struct VehicleBuilder {
    license_plate: String,
    vehicle_type: String,
    assigned_slot: SlotId,
    entry_time: Option<SystemTime>,
}

impl VehicleBuilder {
    /// Sets the entry timestamp explicitly.
    ///
    /// Defaults to the current time, which is what park operations use;
    /// an explicit timestamp is mainly useful when hydrating from storage.
    #[must_use]
    pub const fn entry_time(mut self, time: SystemTime) -> Self {
        self.entry_time = Some(time);
        self
    }

    /// Builds the vehicle, validating its fields.
    ///
    /// Both the license plate and the vehicle type are trimmed of
    /// surrounding whitespace and must be non-empty afterwards.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the plate or type is empty.
    pub fn build(self) -> Result<Vehicle, ValidationError> {
        let license_plate = self.license_plate.trim().to_string();
        if license_plate.is_empty() {
            return Err(ValidationError {
                field: "license_plate".into(),
                message: "license plate must be non-empty".into(),
            });
        }

        let vehicle_type = self.vehicle_type.trim().to_string();
        if vehicle_type.is_empty() {
            return Err(ValidationError {
                field: "vehicle_type".into(),
                message: "vehicle type must be non-empty".into(),
            });
        }

        Ok(Vehicle {
            license_plate,
            vehicle_type,
            entry_time: self.entry_time.unwrap_or_else(SystemTime::now),
            assigned_slot: self.assigned_slot,
        })
    }
}

/// Error returned when a vehicle field fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
