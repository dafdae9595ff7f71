//! Repository layer abstractions.
//!
//! # Responsibility
//! - Define data access contracts for person records.
//! - Isolate collection mechanics from service orchestration.
//!
//! # Invariants
//! - Repositories never persist; state lives for one session.

pub mod person_repo;
