//! Registration form input and validation.
//!
//! # Responsibility
//! - Buffer raw field input exactly as typed.
//! - Map raw input to either a validated draft or per-field messages.
//!
//! # Invariants
//! - Validation is pure: no I/O, no store access.
//! - All rules run on every call; violations are reported together.

pub mod state;
pub mod validate;
