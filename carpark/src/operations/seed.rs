//! Lot seeding.
//!
//! Seeding creates the fixed slot inventory from a [`LotLayout`]: the
//! handicap zone first, then the EV charging zone, then standard slots up
//! to the total. Seeding is idempotent; a lot that already has slots is
//! left untouched.

use rusqlite::TransactionBehavior;

use crate::config::LotLayout;
use crate::database::Database;
use crate::error::Result;
use crate::slot::{Slot, SlotCategory, SlotId};

/// The result of a seed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedResult {
    /// Whether this call created the inventory (`false` when the lot was
    /// already seeded).
    pub seeded: bool,
    /// The number of slots in the inventory after the call.
    pub slot_count: u64,
}

/// Seeds the slot inventory for the given layout.
///
/// Slots are numbered `S1..=S<total>`: the first `handicap_slots` indices
/// are handicap slots, the next `ev_slots` are EV charging slots, and the
/// remainder are standard. If any slots already exist, the inventory is
/// left as-is and `seeded` is `false`.
///
/// The check and the inserts run in one immediate transaction, so two
/// concurrent seeders cannot both populate the lot.
///
/// # Errors
///
/// Returns an error if the layout is invalid or a database operation
/// fails.
pub fn seed_lot(db: &mut Database, layout: &LotLayout) -> Result<SeedResult> {
    layout.validate()?;

    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let existing = Database::count_slots(&tx)?;
    if existing > 0 {
        tx.commit()?;
        return Ok(SeedResult {
            seeded: false,
            slot_count: existing,
        });
    }

    for index in 1..=layout.total_slots {
        let category = if index <= layout.handicap_slots {
            SlotCategory::Handicap
        } else if index <= layout.handicap_slots + layout.ev_slots {
            SlotCategory::EvCharging
        } else {
            SlotCategory::Standard
        };

        // index >= 1, so the id is always valid
        let id = SlotId::new(index)?;
        Database::save_slot(&tx, &Slot::vacant(id, category))?;
    }

    tx.commit()?;

    Ok(SeedResult {
        seeded: true,
        slot_count: u64::from(layout.total_slots),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::create_test_database;

    #[test]
    fn test_seed_default_layout() {
        let mut db = create_test_database();
        let result = seed_lot(&mut db, &LotLayout::default()).unwrap();
        assert!(result.seeded);
        assert_eq!(result.slot_count, 100);

        let slots = Database::list_slots(db.connection()).unwrap();
        assert_eq!(slots.len(), 100);

        for slot in &slots {
            let expected = match slot.id().index() {
                1..=5 => SlotCategory::Handicap,
                6..=10 => SlotCategory::EvCharging,
                _ => SlotCategory::Standard,
            };
            assert_eq!(slot.category(), expected, "slot {}", slot.id());
            assert_eq!(slot.reserved(), expected.is_reserved());
            assert!(!slot.occupied());
        }
    }

    #[test]
    fn test_seed_is_idempotent() {
        let mut db = create_test_database();
        let first = seed_lot(&mut db, &LotLayout::default()).unwrap();
        assert!(first.seeded);

        let second = seed_lot(&mut db, &LotLayout::default()).unwrap();
        assert!(!second.seeded);
        assert_eq!(second.slot_count, 100);

        assert_eq!(Database::count_slots(db.connection()).unwrap(), 100);
    }

    #[test]
    fn test_seed_custom_layout() {
        let mut db = create_test_database();
        let layout = LotLayout {
            total_slots: 10,
            handicap_slots: 2,
            ev_slots: 3,
        };
        let result = seed_lot(&mut db, &layout).unwrap();
        assert!(result.seeded);
        assert_eq!(result.slot_count, 10);

        let slots = Database::list_slots(db.connection()).unwrap();
        let categories: Vec<SlotCategory> = slots.iter().map(Slot::category).collect();
        assert_eq!(&categories[..2], &[SlotCategory::Handicap; 2]);
        assert_eq!(&categories[2..5], &[SlotCategory::EvCharging; 3]);
        assert_eq!(&categories[5..], &[SlotCategory::Standard; 5]);
    }

    #[test]
    fn test_seed_rejects_invalid_layout() {
        let mut db = create_test_database();
        let layout = LotLayout {
            total_slots: 5,
            handicap_slots: 3,
            ev_slots: 3,
        };
        assert!(seed_lot(&mut db, &layout).is_err());
        assert_eq!(Database::count_slots(db.connection()).unwrap(), 0);
    }
}
