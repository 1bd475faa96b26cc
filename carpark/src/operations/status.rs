//! Status operation: a full snapshot of the lot.

use serde::Serialize;

use crate::database::Database;
use crate::error::Result;
use crate::slot::Slot;

/// A point-in-time snapshot of the lot.
///
/// Slots are listed in ascending numeric order, every slot in the lot
/// included whether occupied or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LotStatus {
    slots: Vec<Slot>,
}

impl LotStatus {
    /// Returns all slots in ascending numeric order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the total number of slots.
    #[must_use]
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.occupied()).count()
    }

    /// Returns the number of vacant slots.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.total() - self.occupied_count()
    }
}

/// Reads the full slot inventory.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be mapped
/// back to a slot.
pub fn status(db: &Database) -> Result<LotStatus> {
    let slots = Database::list_slots(db.connection())?;
    Ok(LotStatus { slots })
}
