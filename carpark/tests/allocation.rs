//! Integration tests for slot allocation across the full lot lifecycle.

mod common;

use common::{create_seeded_database, create_test_database, park_ok};

use carpark::{
    park, seed_lot, status, unpark, Database, LotLayout, ParkOutcome, ParkRequest, SlotCategory,
    SlotId, UnparkOutcome,
};

#[test]
fn test_seeded_layout_matches_zones() {
    let db = create_seeded_database();
    let snapshot = status(&db).unwrap();

    assert_eq!(snapshot.total(), 100);
    assert_eq!(snapshot.available_count(), 100);

    for slot in snapshot.slots() {
        let expected = match slot.id().index() {
            1..=5 => SlotCategory::Handicap,
            6..=10 => SlotCategory::EvCharging,
            _ => SlotCategory::Standard,
        };
        assert_eq!(slot.category(), expected);
    }
}

#[test]
fn test_seeding_is_idempotent_across_connections() {
    let mut db = create_test_database();
    let first = seed_lot(&mut db, &LotLayout::default()).unwrap();
    assert!(first.seeded);

    let second = seed_lot(&mut db, &LotLayout::default()).unwrap();
    assert!(!second.seeded);
    assert_eq!(second.slot_count, 100);
}

#[test]
fn test_full_lifecycle_park_status_unpark() {
    let mut db = create_seeded_database();

    let slot = park_ok(&mut db, "KA-01-1234", "CAR");
    assert_eq!(slot.id(), SlotId::new(11).unwrap());

    let snapshot = status(&db).unwrap();
    assert_eq!(snapshot.occupied_count(), 1);
    let occupied = &snapshot.slots()[10];
    assert_eq!(occupied.id(), slot.id());
    assert_eq!(occupied.vehicle().unwrap().license_plate(), "KA-01-1234");

    let outcome = unpark(&mut db, slot.id()).unwrap();
    assert_eq!(
        outcome,
        UnparkOutcome::Released {
            license_plate: "KA-01-1234".to_string()
        }
    );

    let snapshot = status(&db).unwrap();
    assert_eq!(snapshot.occupied_count(), 0);
}

#[test]
fn test_entitled_types_prefer_their_zone() {
    let mut db = create_seeded_database();

    assert_eq!(park_ok(&mut db, "H-1", "HANDICAP").id().index(), 1);
    assert_eq!(park_ok(&mut db, "H-2", "HANDICAP").id().index(), 2);
    assert_eq!(park_ok(&mut db, "E-1", "EV").id().index(), 6);
    assert_eq!(park_ok(&mut db, "C-1", "CAR").id().index(), 11);
}

#[test]
fn test_entitled_overflow_falls_back_to_standard() {
    let mut db = create_seeded_database();

    for n in 1..=5 {
        park_ok(&mut db, &format!("H-{n}"), "HANDICAP");
    }
    let overflow = park_ok(&mut db, "H-6", "HANDICAP");
    assert_eq!(overflow.id().index(), 11);
    assert_eq!(overflow.category(), SlotCategory::Standard);
}

#[test]
fn test_standard_vehicles_never_take_reserved_slots() {
    let mut db = create_seeded_database();

    for n in 1..=90 {
        let slot = park_ok(&mut db, &format!("C-{n}"), "CAR");
        assert_eq!(slot.category(), SlotCategory::Standard);
    }

    let request = ParkRequest::new("C-91", "CAR").unwrap();
    assert_eq!(park(&mut db, &request).unwrap(), ParkOutcome::LotFull);

    // All ten reserved slots are still free for entitled types
    let snapshot = status(&db).unwrap();
    assert_eq!(snapshot.available_count(), 10);
}

#[test]
fn test_fill_entire_lot_then_lot_full() {
    let mut db = create_seeded_database();

    for n in 1..=5 {
        park_ok(&mut db, &format!("H-{n}"), "HANDICAP");
    }
    for n in 1..=5 {
        park_ok(&mut db, &format!("E-{n}"), "EV");
    }
    for n in 1..=90 {
        park_ok(&mut db, &format!("C-{n}"), "CAR");
    }

    let snapshot = status(&db).unwrap();
    assert_eq!(snapshot.occupied_count(), 100);
    assert_eq!(snapshot.available_count(), 0);

    for vehicle_type in ["CAR", "EV", "HANDICAP"] {
        let request = ParkRequest::new(format!("LATE-{vehicle_type}"), vehicle_type).unwrap();
        assert_eq!(park(&mut db, &request).unwrap(), ParkOutcome::LotFull);
    }
}

#[test]
fn test_duplicate_plate_refused_without_consuming_slot() {
    let mut db = create_seeded_database();
    park_ok(&mut db, "KA-01-1234", "CAR");

    let request = ParkRequest::new("KA-01-1234", "EV").unwrap();
    assert_eq!(park(&mut db, &request).unwrap(), ParkOutcome::AlreadyParked);

    assert_eq!(status(&db).unwrap().occupied_count(), 1);
}

#[test]
fn test_unpark_refusals() {
    let mut db = create_seeded_database();

    // Vacant slot
    assert_eq!(
        unpark(&mut db, SlotId::new(50).unwrap()).unwrap(),
        UnparkOutcome::InvalidOrEmptySlot
    );
    // Slot outside the lot
    assert_eq!(
        unpark(&mut db, SlotId::new(101).unwrap()).unwrap(),
        UnparkOutcome::InvalidOrEmptySlot
    );

    // Double departure
    let slot = park_ok(&mut db, "KA-01-1234", "CAR");
    unpark(&mut db, slot.id()).unwrap();
    assert_eq!(
        unpark(&mut db, slot.id()).unwrap(),
        UnparkOutcome::InvalidOrEmptySlot
    );
}

#[test]
fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carpark.db");

    let slot_id = {
        let mut db =
            Database::open(carpark::DatabaseConfig::new(&path)).unwrap();
        seed_lot(&mut db, &LotLayout::default()).unwrap();
        park_ok(&mut db, "KA-01-1234", "EV").id()
    };

    let mut db = Database::open(carpark::DatabaseConfig::new(&path)).unwrap();
    let snapshot = status(&db).unwrap();
    assert_eq!(snapshot.total(), 100);
    assert_eq!(snapshot.occupied_count(), 1);

    let slot = snapshot
        .slots()
        .iter()
        .find(|s| s.id() == slot_id)
        .unwrap();
    let vehicle = slot.vehicle().unwrap();
    assert_eq!(vehicle.license_plate(), "KA-01-1234");
    assert_eq!(vehicle.vehicle_type(), "EV");

    // The restored state behaves normally
    assert_eq!(
        park(&mut db, &ParkRequest::new("KA-01-1234", "EV").unwrap()).unwrap(),
        ParkOutcome::AlreadyParked
    );
    assert!(matches!(
        unpark(&mut db, slot_id).unwrap(),
        UnparkOutcome::Released { .. }
    ));
}
