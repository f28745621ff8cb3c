//! Pure validation rules for the registration form.
//!
//! # Responsibility
//! - Check name/email/phone/age against the registration rules.
//! - Return either a ready-to-store draft or the full set of violations.
//!
//! # Invariants
//! - Every rule runs on every call; the first failure does not short-circuit.
//! - A returned error map is never empty.

use crate::form::state::{Field, FieldErrors, FormFields};
use crate::model::person::PersonDraft;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimal `local@domain.tld` shape: no whitespace, one `@`, a dot after it.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Phone charset after whitespace stripping: digits and `+ - ( )`.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+()\-]{11,}$").expect("valid phone regex"));

const MIN_NAME_CHARS: usize = 2;
const MIN_AGE: u32 = 1;
const MAX_AGE: u32 = 150;

/// Validates raw form input.
///
/// Returns the parsed draft when every rule passes, or a map of every
/// violated field to its message.
pub fn validate(fields: &FormFields) -> Result<PersonDraft, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = fields.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, "name is required".to_string());
    } else if name.chars().count() < MIN_NAME_CHARS {
        errors.insert(
            Field::Name,
            format!("name must be at least {MIN_NAME_CHARS} characters"),
        );
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "email is required".to_string());
    } else if !EMAIL_RE.is_match(email) {
        errors.insert(Field::Email, "email format is invalid".to_string());
    }

    if fields.phone.trim().is_empty() {
        errors.insert(Field::Phone, "phone is required".to_string());
    } else {
        let stripped: String = fields
            .phone
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !PHONE_RE.is_match(&stripped) {
            errors.insert(
                Field::Phone,
                "phone needs at least 11 digits and only + - ( )".to_string(),
            );
        }
    }

    let mut age_value = None;
    let age = fields.age.trim();
    if age.is_empty() {
        errors.insert(Field::Age, "age is required".to_string());
    } else {
        match age.parse::<u32>() {
            Ok(value) if (MIN_AGE..=MAX_AGE).contains(&value) => age_value = Some(value),
            _ => {
                errors.insert(
                    Field::Age,
                    format!("age must be between {MIN_AGE} and {MAX_AGE}"),
                );
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // age_value is always Some here; the age branch either set it or
    // recorded an error.
    let age = age_value.unwrap_or(MIN_AGE);
    Ok(PersonDraft::new(name, email, fields.phone.trim(), age))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::form::state::{Field, FormFields};

    fn valid_fields() -> FormFields {
        FormFields {
            name: "Sarah".to_string(),
            email: "sarah.j@email.com".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            age: "28".to_string(),
        }
    }

    #[test]
    fn valid_input_produces_a_draft() {
        let draft = validate(&valid_fields()).expect("fields should validate");
        assert_eq!(draft.name, "Sarah");
        assert_eq!(draft.age, 28);
    }

    #[test]
    fn phone_keeps_inner_spaces_but_checks_stripped_length() {
        let mut fields = valid_fields();
        fields.phone = "  +1 (555) 234-5678  ".to_string();
        let draft = validate(&fields).expect("padded phone should validate");
        assert_eq!(draft.phone, "+1 (555) 234-5678");
    }

    #[test]
    fn age_boundaries_are_inclusive() {
        for age in ["1", "150"] {
            let mut fields = valid_fields();
            fields.age = age.to_string();
            assert!(validate(&fields).is_ok(), "age {age} should be accepted");
        }
        for age in ["0", "151", "-3", "abc"] {
            let mut fields = valid_fields();
            fields.age = age.to_string();
            let errors = validate(&fields).unwrap_err();
            assert!(errors.contains_key(&Field::Age), "age {age} should fail");
        }
    }
}
