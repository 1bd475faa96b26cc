//! Database operations for slots and vehicles.
//!
//! The query methods here are static and take a plain [`Connection`] so
//! that the allocation logic can run them inside its own transaction; a
//! transaction derefs to a connection, so the same methods serve both
//! transactional and standalone callers.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::Result;
use crate::slot::{Slot, SlotCategory, SlotId};
use crate::vehicle::Vehicle;

use super::connection::Database;
use super::schema::{
    COUNT_SLOTS, DELETE_VEHICLE, FIND_AVAILABLE_BY_CATEGORY, FIND_AVAILABLE_UNRESERVED,
    INSERT_SLOT, INSERT_VEHICLE, LIST_SLOTS, SELECT_SLOT, VEHICLE_EXISTS,
};

fn systemtime_to_unix_secs(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(duration) => i64::try_from(duration.as_secs()).unwrap_or(i64::MAX),
        // Pre-epoch timestamps shouldn't occur, but clamp rather than panic
        Err(_) => 0,
    }
}

fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    let secs = u64::try_from(secs).unwrap_or(0);
    UNIX_EPOCH + Duration::from_secs(secs)
}

fn parse_failure<E>(err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::ToSqlConversionFailure(Box::new(err))
}

/// Maps a joined slot row (slot columns plus LEFT JOIN vehicle columns)
/// to a [`Slot`].
fn row_to_slot(row: &Row) -> rusqlite::Result<Slot> {
    let id_text: String = row.get(0)?;
    let id: SlotId = id_text.parse().map_err(parse_failure)?;

    let category_text: String = row.get(1)?;
    let category: SlotCategory = category_text.parse().map_err(parse_failure)?;

    let reserved: bool = row.get(2)?;

    let plate: Option<String> = row.get(3)?;
    let vehicle = match plate {
        Some(license_plate) => {
            let vehicle_type: String = row.get(4)?;
            let entry_secs: i64 = row.get(5)?;
            let vehicle = Vehicle::builder(license_plate, vehicle_type, id)
                .entry_time(unix_secs_to_systemtime(entry_secs))
                .build()
                .map_err(parse_failure)?;
            Some(vehicle)
        }
        None => None,
    };

    Ok(Slot::from_parts(id, category, reserved, vehicle))
}

/// Maps a vacancy-query row (slot columns only, no occupant) to a [`Slot`].
fn row_to_vacant_slot(row: &Row) -> rusqlite::Result<Slot> {
    let id_text: String = row.get(0)?;
    let id: SlotId = id_text.parse().map_err(parse_failure)?;

    let category_text: String = row.get(1)?;
    let category: SlotCategory = category_text.parse().map_err(parse_failure)?;

    let reserved: bool = row.get(2)?;

    Ok(Slot::from_parts(id, category, reserved, None))
}

impl Database {
    /// Gets a slot by id, with its occupant if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be
    /// mapped back to a slot.
    pub fn get_slot(conn: &Connection, id: SlotId) -> Result<Option<Slot>> {
        let slot = conn
            .query_row(SELECT_SLOT, [id.to_string()], row_to_slot)
            .optional()?;
        Ok(slot)
    }

    /// Finds the lowest-numbered free slot of the given category.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_first_available_by_category(
        conn: &Connection,
        category: SlotCategory,
    ) -> Result<Option<Slot>> {
        let slot = conn
            .query_row(
                FIND_AVAILABLE_BY_CATEGORY,
                [category.as_str()],
                row_to_vacant_slot,
            )
            .optional()?;
        Ok(slot)
    }

    /// Finds the lowest-numbered free slot outside the reserved zones.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_first_available_unreserved(conn: &Connection) -> Result<Option<Slot>> {
        let slot = conn
            .query_row(FIND_AVAILABLE_UNRESERVED, [], row_to_vacant_slot)
            .optional()?;
        Ok(slot)
    }

    /// Saves a slot row, replacing any existing row with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the write
    /// would violate the occupancy consistency constraint.
    pub fn save_slot(conn: &Connection, slot: &Slot) -> Result<()> {
        conn.execute(
            INSERT_SLOT,
            params![
                slot.id().to_string(),
                slot.id().index(),
                slot.category().as_str(),
                slot.reserved(),
                slot.occupied(),
                slot.vehicle().map(Vehicle::license_plate),
            ],
        )?;
        Ok(())
    }

    /// Lists every slot in the inventory in ascending numeric order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be
    /// mapped back to a slot.
    pub fn list_slots(conn: &Connection) -> Result<Vec<Slot>> {
        let mut stmt = conn.prepare(LIST_SLOTS)?;
        let rows = stmt.query_map([], row_to_slot)?;

        let mut slots = Vec::new();
        for row in rows {
            slots.push(row?);
        }
        Ok(slots)
    }

    /// Counts the slots in the inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_slots(conn: &Connection) -> Result<u64> {
        let count: i64 = conn.query_row(COUNT_SLOTS, [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Checks whether a license plate is currently parked anywhere.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn vehicle_exists(conn: &Connection, license_plate: &str) -> Result<bool> {
        let count: i64 = conn.query_row(VEHICLE_EXISTS, [license_plate], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Saves a vehicle record for a parked vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when another
    /// vehicle already holds the target slot or the plate already has
    /// an active session.
    pub fn save_vehicle(conn: &Connection, vehicle: &Vehicle) -> Result<()> {
        conn.execute(
            INSERT_VEHICLE,
            params![
                vehicle.license_plate(),
                vehicle.vehicle_type(),
                systemtime_to_unix_secs(vehicle.entry_time()),
                vehicle.assigned_slot().to_string(),
            ],
        )?;
        Ok(())
    }

    /// Deletes a vehicle record by license plate.
    ///
    /// Returns `true` if a record was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_vehicle(conn: &Connection, license_plate: &str) -> Result<bool> {
        let deleted = conn.execute(DELETE_VEHICLE, [license_plate])?;
        Ok(deleted > 0)
    }

    /// Runs an integrity check on the database file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DatabaseCorruption`] if the check reports
    /// anything other than `ok`, or a database error if the check itself
    /// fails to run.
    pub fn verify_integrity(&self) -> Result<()> {
        let result: String =
            self.connection()
                .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if result == "ok" {
            Ok(())
        } else {
            Err(crate::Error::DatabaseCorruption { details: result })
        }
    }
}
