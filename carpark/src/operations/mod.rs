//! Lot operations: seeding, parking, unparking, and status.
//!
//! Each mutating operation runs its whole read-decide-commit sequence
//! inside a single immediate transaction, so concurrent callers serialize
//! at the database and every decision is made against committed state.
//!
//! Business refusals (duplicate plate, full lot, bad slot id on exit) are
//! expressed as outcome variants, not errors; `Err` is reserved for
//! storage and validation failures.
//!
//! # Examples
//!
//! ```no_run
//! use carpark::config::LotLayout;
//! use carpark::database::{Database, DatabaseConfig};
//! use carpark::operations::{park, seed_lot, ParkOutcome, ParkRequest};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/carpark.db")).unwrap();
//! seed_lot(&mut db, &LotLayout::default()).unwrap();
//!
//! let request = ParkRequest::new("KA-01-1234", "EV").unwrap();
//! match park(&mut db, &request).unwrap() {
//!     ParkOutcome::Parked(slot) => println!("parked at {}", slot.id()),
//!     ParkOutcome::AlreadyParked => println!("already parked"),
//!     ParkOutcome::LotFull => println!("lot full"),
//! }
//! ```

mod park;
mod seed;
mod status;
mod unpark;

pub use park::{park, ParkOutcome, ParkRequest};
pub use seed::{seed_lot, SeedResult};
pub use status::{status, LotStatus};
pub use unpark::{unpark, UnparkOutcome};
