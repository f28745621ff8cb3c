//! Local SQLite-backed person store.
//!
//! # Responsibility
//! - Persist the whole collection as one JSON array under a single key.
//! - Assign unique, monotonic ids and creation/update timestamps.
//!
//! # Invariants
//! - Every mutation is a read-modify-write of the full array, flushed
//!   before the call returns.
//! - `updated_at` is strictly later than `created_at` even when the clock
//!   has not advanced a whole millisecond.

use crate::db::{open_db, open_db_in_memory};
use crate::model::person::{Person, PersonDraft, PersonId, PersonPatch};
use crate::store::{paginate, PageQuery, PageResult, PersonStore, StoreError, StoreResult};
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

const STORE_KEY: &str = "persons";

/// Sample records inserted on first run, mirroring a fresh install.
const DEMO_PEOPLE: &[(&str, &str, &str, u32)] = &[
    ("Sarah", "sarah.j@email.com", "+1 (555) 234-5678", 28),
    ("Mik", "mik.chen@email.com", "+1 (555) 345-6789", 35),
    ("Emman", "emman.d@email.com", "+1 (555) 456-7890", 24),
    ("James", "james.w@email.com", "+1 (555) 567-8901", 42),
    ("mina", "mina.m@email.com", "+1 (555) 678-9012", 31),
    ("David", "david.b@email.com", "+1 (555) 789-0123", 29),
    ("Abdelrahman", "abdel.g@email.com", "+1 (555) 890-1234", 38),
];

/// SQLite key-value backed person store.
pub struct LocalPersonStore {
    conn: Connection,
}

impl LocalPersonStore {
    /// Wraps an already-bootstrapped connection (tests, embedders).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (or creates) the store database at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    /// Inserts the demo people when the store holds no records yet.
    ///
    /// Returns the number of records inserted (0 when already populated).
    pub fn seed_demo(&self) -> StoreResult<usize> {
        if !self.load_all()?.is_empty() {
            return Ok(0);
        }

        for (name, email, phone, age) in DEMO_PEOPLE {
            self.create(&PersonDraft::new(*name, *email, *phone, *age))?;
        }

        info!(
            "event=store_seed module=store status=ok count={}",
            DEMO_PEOPLE.len()
        );
        Ok(DEMO_PEOPLE.len())
    }

    fn load_all(&self) -> StoreResult<Vec<Person>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [STORE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_all(&self, records: &[Person]) -> StoreResult<()> {
        let json = serde_json::to_string(records)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, written_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                written_at = excluded.written_at;",
            params![STORE_KEY, json],
        )?;
        Ok(())
    }
}

impl PersonStore for LocalPersonStore {
    fn list(&self, query: &PageQuery) -> StoreResult<PageResult> {
        let records = self.load_all()?;
        Ok(paginate(&records, query))
    }

    fn create(&self, draft: &PersonDraft) -> StoreResult<Person> {
        let mut records = self.load_all()?;
        let id = next_id(&records);
        let person = Person {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            age: draft.age,
            created_at: id,
            updated_at: None,
        };

        records.push(person.clone());
        self.save_all(&records)?;

        info!("event=person_create module=store status=ok id={id}");
        Ok(person)
    }

    fn update(&self, id: PersonId, patch: &PersonPatch) -> StoreResult<Person> {
        let mut records = self.load_all()?;
        let Some(person) = records.iter_mut().find(|person| person.id == id) else {
            return Err(StoreError::NotFound(id));
        };

        person.apply(patch);
        person.updated_at = Some(now_ms().max(person.created_at + 1));
        let updated = person.clone();
        self.save_all(&records)?;

        info!("event=person_update module=store status=ok id={id}");
        Ok(updated)
    }
}

/// Creation-timestamp id, bumped past the newest record so same-millisecond
/// creations stay unique and monotonic.
fn next_id(records: &[Person]) -> PersonId {
    let floor = records.iter().map(|person| person.id).max().unwrap_or(0);
    now_ms().max(floor + 1)
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
