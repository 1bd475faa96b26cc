//! Common test utilities for integration tests.
//!
//! This module provides helper functions for testing the carpark library.

use carpark::{
    park, seed_lot, Database, DatabaseConfig, LotLayout, ParkOutcome, ParkRequest, Slot,
};

/// Creates a test database in a temporary location.
///
/// The temporary directory is leaked so the database file outlives the
/// helper; the OS cleans it up.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();
    std::mem::forget(dir);
    db
}

/// Creates a test database seeded with the default 100-slot layout.
#[allow(dead_code)]
pub fn create_seeded_database() -> Database {
    let mut db = create_test_database();
    seed_lot(&mut db, &LotLayout::default()).unwrap();
    db
}

/// Parks a vehicle and asserts the attempt succeeds.
#[allow(dead_code)]
pub fn park_ok(db: &mut Database, plate: &str, vehicle_type: &str) -> Slot {
    let request = ParkRequest::new(plate, vehicle_type).unwrap();
    match park(db, &request).unwrap() {
        ParkOutcome::Parked(slot) => slot,
        other => panic!("expected {plate} to park, got {other:?}"),
    }
}
