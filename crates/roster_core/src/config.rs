//! Runtime configuration and backend selection.
//!
//! # Responsibility
//! - Carry the local/remote backend switch and its one parameter.
//! - Build the matching `PersonStore` for the controller.
//!
//! # Invariants
//! - `page_size` is always at least 1.
//! - Demo seeding only ever applies to the local backend.

use crate::store::local::LocalPersonStore;
use crate::store::remote::RemotePersonStore;
use crate::store::{PersonStore, StoreResult};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);
const DEFAULT_DB_FILE: &str = "roster.db";

/// Which backend holds the records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// Embedded SQLite key-value file.
    Local { db_path: PathBuf },
    /// Remote REST service rooted at `base_url`.
    Remote { base_url: String },
}

/// Application configuration for one session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub page_size: u32,
    pub notification_ttl: Duration,
    /// Insert sample records into an empty local store on open.
    pub seed_demo: bool,
}

impl AppConfig {
    pub fn local(db_path: impl Into<PathBuf>) -> Self {
        Self {
            backend: BackendConfig::Local {
                db_path: db_path.into(),
            },
            page_size: DEFAULT_PAGE_SIZE,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            seed_demo: false,
        }
    }

    pub fn remote(base_url: impl Into<String>) -> Self {
        Self {
            backend: BackendConfig::Remote {
                base_url: base_url.into(),
            },
            page_size: DEFAULT_PAGE_SIZE,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            seed_demo: false,
        }
    }

    /// Reads configuration from the environment.
    ///
    /// `ROSTER_API_URL` selects the remote backend; otherwise `ROSTER_DB`
    /// (default `roster.db`) selects the local one. `ROSTER_PAGE_SIZE`
    /// overrides the page size when it parses as a positive integer.
    pub fn from_env() -> Self {
        let mut config = match std::env::var("ROSTER_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::remote(url.trim()),
            _ => {
                let path = std::env::var("ROSTER_DB")
                    .ok()
                    .filter(|value| !value.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_DB_FILE.to_string());
                Self::local(path)
            }
        };

        if let Some(size) = std::env::var("ROSTER_PAGE_SIZE")
            .ok()
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|size| *size > 0)
        {
            config.page_size = size;
        }

        config
    }

    /// Opens the configured backend, seeding demo data when asked.
    pub fn open_store(&self) -> StoreResult<Box<dyn PersonStore>> {
        match &self.backend {
            BackendConfig::Local { db_path } => {
                let store = LocalPersonStore::open(db_path)?;
                if self.seed_demo {
                    store.seed_demo()?;
                }
                Ok(Box::new(store))
            }
            BackendConfig::Remote { base_url } => {
                Ok(Box::new(RemotePersonStore::new(base_url.clone())))
            }
        }
    }
}
