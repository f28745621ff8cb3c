//! Domain model for person records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by every backend.
//! - Keep one wire representation (camelCase JSON) for local persistence
//!   and the remote REST contract alike.
//!
//! # Invariants
//! - Every record is identified by a stable `PersonId`.
//! - Records are never physically deleted; the store has no delete path.

pub mod person;
