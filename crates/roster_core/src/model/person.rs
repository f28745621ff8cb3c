//! Person record model.
//!
//! # Responsibility
//! - Define the canonical person record and its create/update inputs.
//! - Match the remote REST wire shape (camelCase keys).
//!
//! # Invariants
//! - `id` is unique within a store and never reassigned.
//! - `created_at` is set once at creation; `updated_at` only ever moves
//!   forward and is strictly later than `created_at` when set.

use serde::{Deserialize, Serialize};

/// Stable identifier for a person record.
///
/// Unix epoch milliseconds at creation time, bumped by the store when two
/// creations land in the same millisecond so ids stay unique and monotonic.
pub type PersonId = i64;

/// Canonical person record persisted by every backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds; `None` until the first update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Person {
    /// Applies a patch in place, leaving `None` fields untouched.
    ///
    /// Timestamp stamping is the store's job, not the model's.
    pub fn apply(&mut self, patch: &PersonPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            self.phone = phone.clone();
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

/// Validated field set accepted by `PersonStore::create`.
///
/// Produced by the form validator; construction bypassing validation is
/// fine for callers that already hold trusted values (tests, seeding).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
}

impl PersonDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            age,
        }
    }

    /// Converts the draft into a full-replacement patch.
    pub fn into_patch(self) -> PersonPatch {
        PersonPatch {
            name: Some(self.name),
            email: Some(self.email),
            phone: Some(self.phone),
            age: Some(self.age),
        }
    }
}

/// Partial update accepted by `PersonStore::update`.
///
/// Only `Some` fields are merged into the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::{Person, PersonDraft, PersonPatch};

    fn sample() -> Person {
        Person {
            id: 1,
            name: "Sarah".to_string(),
            email: "sarah.j@email.com".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            age: 28,
            created_at: 1_700_000_000_000,
            updated_at: None,
        }
    }

    #[test]
    fn apply_merges_only_given_fields() {
        let mut person = sample();
        person.apply(&PersonPatch {
            email: Some("sarah@new.example".to_string()),
            ..PersonPatch::default()
        });

        assert_eq!(person.email, "sarah@new.example");
        assert_eq!(person.name, "Sarah");
        assert_eq!(person.age, 28);
    }

    #[test]
    fn draft_into_patch_sets_every_field() {
        let patch = PersonDraft::new("Mik", "mik.chen@email.com", "+1 (555) 345-6789", 35)
            .into_patch();
        assert_eq!(patch.name.as_deref(), Some("Mik"));
        assert_eq!(patch.age, Some(35));
    }

    #[test]
    fn wire_shape_uses_camel_case_and_omits_unset_update_time() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("\"updatedAt\""));

        let parsed: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
