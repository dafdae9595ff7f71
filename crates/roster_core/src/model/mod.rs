//! Domain model for the roster demo.
//!
//! # Responsibility
//! - Define canonical data structures used by store, export and driver.
//!
//! # Invariants
//! - Records are never deleted; the store only appends.

pub mod person;
