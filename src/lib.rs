//! SNMP location library
//!
//! Normalizes raw `sysLocation` strings into organizer paths and rack slots.
//! Exposes modules for integration testing and binary reuse.

pub mod domain;
pub mod infra;
pub mod io;
pub mod services;

pub use services::normalizer::normalize;
