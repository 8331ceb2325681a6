use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::draft::{BookingDraft, Field};

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid name pattern"));
// Indian mobile numbers start with 6-9; the +91 prefix is optional.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+91)?[6-9][0-9]{9}$").expect("valid phone pattern"));

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const ADDRESS_MAX_CHARS: usize = 300;
pub const NOTES_MAX_CHARS: usize = 500;

/// A single field failing its rule. Shown inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if length < NAME_MIN_CHARS {
        return Err(ValidationError::new(Field::Name, "Please enter your name"));
    }
    if length > NAME_MAX_CHARS {
        return Err(ValidationError::new(Field::Name, "Name is too long"));
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::new(Field::Name, "Name should only contain letters"));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new(
            Field::Phone,
            "Please enter a valid 10-digit mobile number",
        ))
    }
}

/// Checks one field of the draft. Optional fields pass when left empty.
pub fn validate_field(draft: &BookingDraft, field: Field, today: NaiveDate) -> Result<(), ValidationError> {
    match field {
        Field::Name => validate_name(&draft.name),
        Field::Phone => validate_phone(&draft.phone),
        Field::Service => match draft.service {
            Some(_) => Ok(()),
            None => Err(ValidationError::new(Field::Service, "Please select a service")),
        },
        Field::PreferredDate => match draft.preferred_date {
            Some(date) if date < today => Err(ValidationError::new(
                Field::PreferredDate,
                "Please select today or a future date",
            )),
            _ => Ok(()),
        },
        Field::Address if draft.address.chars().count() > ADDRESS_MAX_CHARS => {
            Err(ValidationError::new(Field::Address, "Address is too long"))
        }
        Field::Notes if draft.notes.chars().count() > NOTES_MAX_CHARS => {
            Err(ValidationError::new(Field::Notes, "Message is too long"))
        }
        Field::AcType | Field::TimeSlot | Field::Area | Field::Address | Field::Notes => Ok(()),
    }
}

/// Runs `validate_field` over `fields`, collecting every failure in order.
pub fn validate_fields(draft: &BookingDraft, fields: &[Field], today: NaiveDate) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = fields
        .iter()
        .filter_map(|field| validate_field(draft, *field, today).err())
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub const ALL_FIELDS: &[Field] = &[
    Field::Name,
    Field::Phone,
    Field::Service,
    Field::AcType,
    Field::PreferredDate,
    Field::TimeSlot,
    Field::Area,
    Field::Address,
    Field::Notes,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn names_with_digits_or_symbols_are_rejected() {
        for name in ["R2D2", "Amit_Desai", "Priya!", "O'Brien", "Rajesh-Kumar", "Sam 3"] {
            let err = validate_name(name).unwrap_err();
            assert_eq!(err.field, Field::Name, "{name}");
            assert_eq!(err.message, "Name should only contain letters");
        }
    }

    #[test]
    fn name_length_bounds() {
        assert_eq!(validate_name("A").unwrap_err().message, "Please enter your name");
        assert_eq!(validate_name("").unwrap_err().message, "Please enter your name");
        assert_eq!(validate_name(&"a".repeat(101)).unwrap_err().message, "Name is too long");
        assert!(validate_name(&"a".repeat(100)).is_ok());
        assert!(validate_name("Rajesh Kumar").is_ok());
    }

    #[test]
    fn phone_accepts_indian_mobiles_with_optional_country_code() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("+916123456789").is_ok());
    }

    #[test]
    fn phone_rejects_anything_else() {
        for phone in [
            "",
            "5876543210",
            "987654321",
            "98765432101",
            "91 9876543210",
            "919876543210",
            "+9198765 43210",
            "+1 9876543210",
            "98765abcde",
            " 9876543210",
        ] {
            let err = validate_phone(phone).unwrap_err();
            assert_eq!(err.field, Field::Phone, "{phone:?}");
        }
    }

    #[test]
    fn past_dates_fail_but_today_passes() {
        let mut draft = BookingDraft::default();
        draft.preferred_date = today().pred_opt();
        assert!(validate_field(&draft, Field::PreferredDate, today()).is_err());
        draft.preferred_date = Some(today());
        assert!(validate_field(&draft, Field::PreferredDate, today()).is_ok());
        draft.preferred_date = None;
        assert!(validate_field(&draft, Field::PreferredDate, today()).is_ok());
    }

    #[test]
    fn free_text_limits() {
        let mut draft = BookingDraft::default();
        draft.address = "x".repeat(ADDRESS_MAX_CHARS);
        draft.notes = "y".repeat(NOTES_MAX_CHARS + 1);
        assert!(validate_field(&draft, Field::Address, today()).is_ok());
        assert_eq!(
            validate_field(&draft, Field::Notes, today()).unwrap_err().message,
            "Message is too long"
        );
    }

    #[test]
    fn address_over_limit_is_rejected() {
        let mut draft = BookingDraft::default();
        draft.address = "x".repeat(ADDRESS_MAX_CHARS + 1);
        let err = validate_field(&draft, Field::Address, today()).unwrap_err();
        assert_eq!(err.field, Field::Address);
        assert_eq!(err.message, "Address is too long");
    }

    #[test]
    fn collects_every_failure_in_field_order() {
        let draft = BookingDraft::default();
        let errors = validate_fields(&draft, ALL_FIELDS, today()).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Phone, Field::Service]);
        assert_eq!(errors[0].to_string(), "Name: Please enter your name");
    }
}
