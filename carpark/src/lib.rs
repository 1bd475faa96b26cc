#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # carpark
//!
//! A library for tracking parking lot occupancy.
//!
//! The lot is a fixed inventory of slots persisted in `SQLite`: a handicap
//! zone, an EV charging zone, and standard slots. Vehicles are allocated
//! the first suitable slot on arrival and released by slot id on
//! departure, with business refusals (duplicate plate, full lot, bad slot
//! id) reported as outcome variants rather than errors.
//!
//! ## Core Types
//!
//! - [`SlotId`], [`SlotCategory`], and [`Slot`]: the slot inventory
//! - [`Vehicle`]: a parked vehicle with its session metadata
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use carpark::{SlotCategory, SlotId};
//!
//! // Slot ids are validated and ordered numerically
//! let id: SlotId = "S42".parse().unwrap();
//! assert_eq!(id.index(), 42);
//!
//! // Reserved categories are excluded from the fallback pool
//! assert!(SlotCategory::EvCharging.is_reserved());
//! assert!(!SlotCategory::Standard.is_reserved());
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod slot;
pub mod vehicle;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, LotLayout};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    park, seed_lot, status, unpark, LotStatus, ParkOutcome, ParkRequest, SeedResult, UnparkOutcome,
};
pub use slot::{Slot, SlotCategory, SlotId};
pub use vehicle::{Vehicle, VehicleBuilder};
