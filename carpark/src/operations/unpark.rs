//! Unpark operation: releasing a slot when a vehicle departs.

use rusqlite::TransactionBehavior;

use crate::database::Database;
use crate::error::Result;
use crate::slot::SlotId;

/// The outcome of an unpark operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnparkOutcome {
    /// The slot was released; the plate of the departing vehicle is
    /// returned so callers can report or bill it.
    Released {
        /// License plate of the vehicle that departed.
        license_plate: String,
    },
    /// The slot id does not exist in the lot, or the slot is vacant.
    InvalidOrEmptySlot,
}

/// Releases the vehicle parked in the given slot.
///
/// An unknown slot id and a vacant slot are both refused with
/// [`UnparkOutcome::InvalidOrEmptySlot`]; the two cases are deliberately
/// not distinguished. The lookup and both writes run in one immediate
/// transaction.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn unpark(db: &mut Database, slot_id: SlotId) -> Result<UnparkOutcome> {
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let Some(mut slot) = Database::get_slot(&tx, slot_id)? else {
        tx.commit()?;
        return Ok(UnparkOutcome::InvalidOrEmptySlot);
    };

    let Some(vehicle) = slot.release() else {
        tx.commit()?;
        return Ok(UnparkOutcome::InvalidOrEmptySlot);
    };

    Database::delete_vehicle(&tx, vehicle.license_plate())?;
    Database::save_slot(&tx, &slot)?;

    tx.commit()?;

    Ok(UnparkOutcome::Released {
        license_plate: vehicle.license_plate().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LotLayout;
    use crate::database::test_util::create_test_database;
    use crate::operations::{park, seed_lot, ParkOutcome, ParkRequest};

    fn seeded_db() -> Database {
        let mut db = create_test_database();
        seed_lot(&mut db, &LotLayout::default()).unwrap();
        db
    }

    fn park_ok(db: &mut Database, plate: &str, vehicle_type: &str) -> SlotId {
        let request = ParkRequest::new(plate, vehicle_type).unwrap();
        match park(db, &request).unwrap() {
            ParkOutcome::Parked(slot) => slot.id(),
            other => panic!("expected Parked, got {other:?}"),
        }
    }

    #[test]
    fn test_unpark_releases_slot() {
        let mut db = seeded_db();
        let slot_id = park_ok(&mut db, "KA-01-0001", "CAR");

        let outcome = unpark(&mut db, slot_id).unwrap();
        assert_eq!(
            outcome,
            UnparkOutcome::Released {
                license_plate: "KA-01-0001".to_string()
            }
        );

        let slot = Database::get_slot(db.connection(), slot_id)
            .unwrap()
            .unwrap();
        assert!(!slot.occupied());
        assert!(!Database::vehicle_exists(db.connection(), "KA-01-0001").unwrap());
    }

    #[test]
    fn test_unpark_vacant_slot() {
        let mut db = seeded_db();
        let outcome = unpark(&mut db, SlotId::new(42).unwrap()).unwrap();
        assert_eq!(outcome, UnparkOutcome::InvalidOrEmptySlot);
    }

    #[test]
    fn test_unpark_unknown_slot() {
        let mut db = seeded_db();
        let outcome = unpark(&mut db, SlotId::new(999).unwrap()).unwrap();
        assert_eq!(outcome, UnparkOutcome::InvalidOrEmptySlot);
    }

    #[test]
    fn test_second_unpark_refused() {
        let mut db = seeded_db();
        let slot_id = park_ok(&mut db, "KA-01-0001", "CAR");

        unpark(&mut db, slot_id).unwrap();
        let outcome = unpark(&mut db, slot_id).unwrap();
        assert_eq!(outcome, UnparkOutcome::InvalidOrEmptySlot);
    }

    #[test]
    fn test_released_slot_is_reallocated() {
        let mut db = seeded_db();
        let slot_id = park_ok(&mut db, "KA-01-0001", "CAR");
        unpark(&mut db, slot_id).unwrap();

        // The freed slot is the lowest-numbered standard slot again
        let next = park_ok(&mut db, "KA-01-0002", "CAR");
        assert_eq!(next, slot_id);
    }

    #[test]
    fn test_plate_can_return_after_unpark() {
        let mut db = seeded_db();
        let slot_id = park_ok(&mut db, "KA-01-0001", "CAR");
        unpark(&mut db, slot_id).unwrap();

        // Same plate parks again once the earlier session ended
        park_ok(&mut db, "KA-01-0001", "CAR");
    }

    #[test]
    fn test_released_reserved_slot_stays_reserved() {
        let mut db = seeded_db();
        let slot_id = park_ok(&mut db, "EV-1", "EV");
        unpark(&mut db, slot_id).unwrap();

        let slot = Database::get_slot(db.connection(), slot_id)
            .unwrap()
            .unwrap();
        assert!(slot.reserved());

        // Still invisible to the generic fallback pool
        let fallback = park_ok(&mut db, "CAR-1", "CAR");
        assert_ne!(fallback, slot_id);
    }
}
