//! Core domain logic for Roster, a person-registration portal.
//! This crate is the single source of truth for business invariants.

pub mod app;
pub mod config;
pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod store;

pub use app::controller::{Screen, SubmitOutcome, ViewController};
pub use app::notify::{Notice, NoticeKind, NoticeSlot};
pub use config::{AppConfig, BackendConfig};
pub use form::state::{Field, FieldErrors, FormFields, FormState};
pub use form::validate::validate;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Person, PersonDraft, PersonId, PersonPatch};
pub use store::local::LocalPersonStore;
pub use store::remote::RemotePersonStore;
pub use store::{PageQuery, PageResult, PersonStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
