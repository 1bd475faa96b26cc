//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the lot with its slot inventory
//! - `park`: Park a vehicle in the first suitable slot
//! - `unpark`: Release the vehicle parked in a slot
//! - `status`: Show the full slot inventory

pub mod init;
pub mod park;
pub mod status;
pub mod unpark;

pub use init::InitCommand;
pub use park::ParkCommand;
pub use status::StatusCommand;
pub use unpark::UnparkCommand;
