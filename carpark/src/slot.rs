//! Slot types for the parking lot inventory.
//!
//! This module provides the core slot types: validated slot identifiers,
//! slot categories, and the slot record itself with its occupancy invariant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::vehicle::Vehicle;

/// A validated parking slot identifier.
///
/// Slot identifiers have the form `"S" + n` where `n` is a positive integer
/// (`S1`, `S2`, ... `S100`). Identifiers are ordered by their numeric index,
/// not lexically, so `S2` sorts before `S10`. This ordering is the tie-break
/// used everywhere a "first available" slot is chosen.
///
/// # Examples
///
/// ```
/// use carpark::SlotId;
///
/// let id = SlotId::new(7).unwrap();
/// assert_eq!(id.to_string(), "S7");
/// assert_eq!(id.index(), 7);
///
/// let parsed: SlotId = "S42".parse().unwrap();
/// assert_eq!(parsed.index(), 42);
///
/// // Numeric ordering, not lexical
/// let a: SlotId = "S2".parse().unwrap();
/// let b: SlotId = "S10".parse().unwrap();
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotId(u32);

impl SlotId {
    /// Creates a slot identifier from a numeric index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use carpark::SlotId;
    ///
    /// assert!(SlotId::new(1).is_ok());
    /// assert!(SlotId::new(0).is_err());
    /// ```
    pub fn new(index: u32) -> Result<Self, InvalidSlotIdError> {
        if index == 0 {
            return Err(InvalidSlotIdError {
                value: "S0".to_string(),
                reason: "slot index must be at least 1".to_string(),
            });
        }
        Ok(Self(index))
    }

    /// Returns the numeric index of this slot.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

impl FromStr for SlotId {
    type Err = InvalidSlotIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| InvalidSlotIdError {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let digits = s
            .strip_prefix('S')
            .ok_or_else(|| invalid("slot id must start with 'S'"))?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("slot id must be 'S' followed by digits"));
        }
        // Reject non-canonical forms like "S007" so parse/format round-trips.
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(invalid("slot index must not have leading zeros"));
        }

        let index: u32 = digits
            .parse()
            .map_err(|_| invalid("slot index out of range"))?;

        Self::new(index).map_err(|_| invalid("slot index must be at least 1"))
    }
}

impl TryFrom<String> for SlotId {
    type Error = InvalidSlotIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotId> for String {
    fn from(id: SlotId) -> Self {
        id.to_string()
    }
}

/// Error returned when a slot identifier is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSlotIdError {
    /// The rejected identifier text.
    pub value: String,
    /// The reason the identifier is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidSlotIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid slot id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidSlotIdError {}

/// The category of a parking slot.
///
/// `Handicap` and `EvCharging` slots are reserved: they are excluded from
/// the generic fallback pool and only claimed preferentially by matching
/// vehicle types. `Standard` slots form the fallback pool.
///
/// # Examples
///
/// ```
/// use carpark::SlotCategory;
///
/// assert!(SlotCategory::Handicap.is_reserved());
/// assert!(SlotCategory::EvCharging.is_reserved());
/// assert!(!SlotCategory::Standard.is_reserved());
/// assert_eq!(SlotCategory::EvCharging.as_str(), "EV_CHARGING");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotCategory {
    /// Reserved for vehicles of type `HANDICAP`.
    Handicap,
    /// Reserved for vehicles of type `EV`.
    EvCharging,
    /// General-purpose slot, claimable by any vehicle.
    Standard,
}

impl SlotCategory {
    /// Returns the stable wire string for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Handicap => "HANDICAP",
            Self::EvCharging => "EV_CHARGING",
            Self::Standard => "STANDARD",
        }
    }

    /// Returns whether slots of this category are reserved.
    ///
    /// Reserved slots never appear in the generic fallback pool.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(self, Self::Handicap | Self::EvCharging)
    }
}

impl fmt::Display for SlotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotCategory {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HANDICAP" => Ok(Self::Handicap),
            "EV_CHARGING" => Ok(Self::EvCharging),
            "STANDARD" => Ok(Self::Standard),
            _ => Err(InvalidCategoryError {
                value: s.to_string(),
            }),
        }
    }
}

/// Error returned when a category string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCategoryError {
    /// The rejected category text.
    pub value: String,
}

impl fmt::Display for InvalidCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown slot category '{}' (expected HANDICAP, EV_CHARGING, or STANDARD)",
            self.value
        )
    }
}

impl std::error::Error for InvalidCategoryError {}

/// A single parking slot.
///
/// A slot has a fixed identity and category for the lifetime of the lot and
/// an occupancy state that changes as vehicles park and depart. The type
/// maintains the invariant that a slot is occupied exactly when it holds a
/// parked vehicle: there is no way to construct or mutate a `Slot` into a
/// state where the two disagree.
///
/// # Examples
///
/// ```
/// use carpark::{Slot, SlotCategory, SlotId};
///
/// let slot = Slot::vacant(SlotId::new(11).unwrap(), SlotCategory::Standard);
/// assert!(!slot.occupied());
/// assert!(slot.vehicle().is_none());
/// assert!(!slot.reserved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    id: SlotId,
    category: SlotCategory,
    reserved: bool,
    vehicle: Option<Vehicle>,
}

impl Slot {
    /// Creates a vacant slot of the given category.
    ///
    /// The reserved flag is derived from the category.
    #[must_use]
    pub const fn vacant(id: SlotId, category: SlotCategory) -> Self {
        Self {
            id,
            category,
            reserved: category.is_reserved(),
            vehicle: None,
        }
    }

    /// Reconstructs a slot from stored state.
    ///
    /// This is used when hydrating slots from the database, where the
    /// reserved flag is persisted rather than derived.
    #[must_use]
    pub const fn from_parts(
        id: SlotId,
        category: SlotCategory,
        reserved: bool,
        vehicle: Option<Vehicle>,
    ) -> Self {
        Self {
            id,
            category,
            reserved,
            vehicle,
        }
    }

    /// Returns the slot identifier.
    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// Returns the slot category.
    #[must_use]
    pub const fn category(&self) -> SlotCategory {
        self.category
    }

    /// Returns whether this slot is reserved.
    #[must_use]
    pub const fn reserved(&self) -> bool {
        self.reserved
    }

    /// Returns whether this slot is occupied.
    ///
    /// A slot is occupied exactly when it holds a parked vehicle.
    #[must_use]
    pub const fn occupied(&self) -> bool {
        self.vehicle.is_some()
    }

    /// Returns the parked vehicle, if any.
    #[must_use]
    pub const fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// Attaches a vehicle to this slot, marking it occupied.
    pub fn assign(&mut self, vehicle: Vehicle) {
        self.vehicle = Some(vehicle);
    }

    /// Detaches the parked vehicle, marking the slot vacant.
    ///
    /// Returns the vehicle that was parked, or `None` if the slot was
    /// already vacant.
    pub fn release(&mut self) -> Option<Vehicle> {
        self.vehicle.take()
    }
}
