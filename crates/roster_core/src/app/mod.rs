//! View orchestration for the two-screen registration UI.
//!
//! # Responsibility
//! - Hold all UI state: active screen, edit target, search, paging,
//!   notification.
//! - Drive the store and the validator in response to user actions.
//!
//! # Invariants
//! - Every store failure is caught here and converted to a notification;
//!   nothing is fatal.
//! - The store is only reached through `PersonStore`, never directly.

pub mod controller;
pub mod notify;
