//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and query
//! constants for the carpark slot inventory.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the slots table.
///
/// One row per parking slot, created once at seeding time. `slot_index`
/// carries the numeric part of the slot id so that "first available"
/// queries order numerically (S2 before S10). The CHECK constraint keeps
/// the occupied flag and the occupant plate in lockstep.
pub const CREATE_SLOTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS slots (
        slot_id TEXT PRIMARY KEY NOT NULL,
        slot_index INTEGER NOT NULL UNIQUE,
        category TEXT NOT NULL,
        reserved INTEGER NOT NULL,
        occupied INTEGER NOT NULL DEFAULT 0,
        license_plate TEXT,
        CHECK ((occupied = 0 AND license_plate IS NULL)
            OR (occupied = 1 AND license_plate IS NOT NULL))
    )";

/// SQL statement to create the vehicles table.
///
/// One row per currently-parked vehicle, keyed by license plate. The
/// UNIQUE constraint on `slot_id` enforces one vehicle per slot even
/// under concurrent writers.
pub const CREATE_VEHICLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS vehicles (
        license_plate TEXT PRIMARY KEY NOT NULL,
        vehicle_type TEXT NOT NULL,
        entry_time INTEGER NOT NULL,
        slot_id TEXT NOT NULL UNIQUE
    )";

/// SQL statement to create an index for the reserved-slot search.
pub const CREATE_CATEGORY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_slots_category ON slots(occupied, category)";

/// SQL statement to create an index for the fallback-pool search.
pub const CREATE_RESERVED_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_slots_reserved ON slots(occupied, reserved)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to select a slot by id, with its occupant if any.
///
/// Vehicle columns come from a LEFT JOIN and are NULL for vacant slots.
pub const SELECT_SLOT: &str = r"
    SELECT s.slot_id, s.category, s.reserved,
           v.license_plate, v.vehicle_type, v.entry_time
    FROM slots s
    LEFT JOIN vehicles v ON v.license_plate = s.license_plate
    WHERE s.slot_id = ?
";

/// SQL statement to find the first free slot of a category.
pub const FIND_AVAILABLE_BY_CATEGORY: &str = r"
    SELECT slot_id, category, reserved
    FROM slots
    WHERE occupied = 0 AND category = ?
    ORDER BY slot_index
    LIMIT 1
";

/// SQL statement to find the first free unreserved slot.
pub const FIND_AVAILABLE_UNRESERVED: &str = r"
    SELECT slot_id, category, reserved
    FROM slots
    WHERE occupied = 0 AND reserved = 0
    ORDER BY slot_index
    LIMIT 1
";

/// SQL statement to insert or replace a slot row.
pub const INSERT_SLOT: &str = r"
    INSERT OR REPLACE INTO slots
    (slot_id, slot_index, category, reserved, occupied, license_plate)
    VALUES (?, ?, ?, ?, ?, ?)
";

/// SQL statement to list all slots with their occupants, in numeric order.
pub const LIST_SLOTS: &str = r"
    SELECT s.slot_id, s.category, s.reserved,
           v.license_plate, v.vehicle_type, v.entry_time
    FROM slots s
    LEFT JOIN vehicles v ON v.license_plate = s.license_plate
    ORDER BY s.slot_index
";

/// SQL statement to count the slots in the inventory.
pub const COUNT_SLOTS: &str = "SELECT COUNT(*) FROM slots";

/// SQL statement to check whether a license plate is currently parked.
pub const VEHICLE_EXISTS: &str = "SELECT COUNT(*) FROM vehicles WHERE license_plate = ?";

/// SQL statement to insert a vehicle record.
///
/// A plain INSERT: vehicle rows are only created at park time and
/// deleted at unpark, so a conflict on the plate or the slot must fail
/// rather than replace the existing occupant.
pub const INSERT_VEHICLE: &str = r"
    INSERT INTO vehicles
    (license_plate, vehicle_type, entry_time, slot_id)
    VALUES (?, ?, ?, ?)
";

/// SQL statement to delete a vehicle record by license plate.
pub const DELETE_VEHICLE: &str = "DELETE FROM vehicles WHERE license_plate = ?";
