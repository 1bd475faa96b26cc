//! Database layer for persistent storage of the slot inventory.
//!
//! This module provides a SQLite-based storage layer for the parking lot:
//! connection management, schema versioning, and the narrow slot/vehicle
//! store queries the allocation policy needs.
//!
//! # Examples
//!
//! ```no_run
//! use carpark::database::{Database, DatabaseConfig};
//!
//! let config = DatabaseConfig::new("/tmp/carpark.db");
//! let db = Database::open(config).unwrap();
//!
//! let slots = Database::list_slots(db.connection()).unwrap();
//! for slot in slots {
//!     println!("{} {}", slot.id(), slot.category());
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
