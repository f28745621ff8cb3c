//! Form field buffer and inline error map.
//!
//! # Responsibility
//! - Hold the four raw string fields as the user typed them.
//! - Carry the field→message map surfaced under each input.
//!
//! # Invariants
//! - Editing a field clears that field's stale error, nothing else.
//! - `clear` resets fields and errors together.

use crate::model::person::Person;
use std::collections::BTreeMap;

/// One of the four registration form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Age,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Age];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Age => "age",
        }
    }

    pub fn parse(value: &str) -> Option<Field> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "age" => Some(Field::Age),
            _ => None,
        }
    }
}

/// Per-field validation messages; empty means the form is valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// Raw form input, kept as strings until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Age => self.age = value,
        }
    }

    /// Populates the form from an existing record for editing.
    ///
    /// `age` is rendered back to its string representation.
    pub fn fill_from(&mut self, person: &Person) {
        self.name = person.name.clone();
        self.email = person.email.clone();
        self.phone = person.phone.clone();
        self.age = person.age.to_string();
    }
}

/// Form fields plus their current inline errors.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: FormFields,
    pub errors: FieldErrors,
}

impl FormState {
    /// Updates one field and clears its stale error while the user types.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.fields = FormFields::default();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FormState};

    #[test]
    fn setting_a_field_clears_only_its_error() {
        let mut form = FormState::default();
        form.errors.insert(Field::Name, "name is required".to_string());
        form.errors.insert(Field::Age, "age is required".to_string());

        form.set(Field::Name, "Sarah");

        assert!(!form.errors.contains_key(&Field::Name));
        assert!(form.errors.contains_key(&Field::Age));
        assert_eq!(form.fields.name, "Sarah");
    }

    #[test]
    fn field_parse_round_trips_names() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.as_str()), Some(field));
        }
        assert_eq!(Field::parse("address"), None);
    }
}
