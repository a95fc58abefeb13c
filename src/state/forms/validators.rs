//! Field validators
//!
//! One total function per field. Emptiness is always checked before shape so
//! an empty field reports [`REQUIRED`] rather than a format message.

use super::field::FieldName;
use thiserror::Error;

pub const REQUIRED: &str = "required";
pub const POSTAL_CODE_FORMAT: &str = "must match NNNNN-NNN format";
pub const STREET_TOO_SHORT: &str = "minimum 5 characters";
pub const DIGITS_ONLY: &str = "digits only";
pub const STATE_FORMAT: &str = "must be exactly 2 uppercase letters";

/// Shortest accepted street name, in characters
pub const STREET_MIN_CHARS: usize = 5;

/// Result of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(String),
}

impl ValidationOutcome {
    fn invalid(message: &str) -> Self {
        ValidationOutcome::Invalid(message.to_string())
    }

    /// Attach the field, turning an invalid outcome into a failure
    pub fn into_failure(self, field: FieldName) -> Option<ValidationFailure> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(message) => Some(ValidationFailure { field, message }),
        }
    }
}

/// A violated field rule, displayed as `"<label>: <message>"`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", .field.label(), .message)]
pub struct ValidationFailure {
    pub field: FieldName,
    pub message: String,
}

/// Validate `value` with the rule for `field`
pub fn validate(field: FieldName, value: &str) -> ValidationOutcome {
    match field {
        FieldName::PostalCode => validate_postal_code(value),
        FieldName::Street => validate_street(value),
        FieldName::Number => validate_number(value),
        FieldName::State => validate_state(value),
    }
}

/// Postal code: exactly five digits, a hyphen and three digits
pub fn validate_postal_code(value: &str) -> ValidationOutcome {
    if value.is_empty() {
        return ValidationOutcome::invalid(REQUIRED);
    }

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 9
        && bytes[..5].iter().all(u8::is_ascii_digit)
        && bytes[5] == b'-'
        && bytes[6..].iter().all(u8::is_ascii_digit);

    if well_formed {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(POSTAL_CODE_FORMAT)
    }
}

/// Street: at least five characters once surrounding whitespace is removed
pub fn validate_street(value: &str) -> ValidationOutcome {
    let value = value.trim();
    if value.is_empty() {
        ValidationOutcome::invalid(REQUIRED)
    } else if value.chars().count() < STREET_MIN_CHARS {
        ValidationOutcome::invalid(STREET_TOO_SHORT)
    } else {
        ValidationOutcome::Valid
    }
}

/// House number: one or more decimal digits
pub fn validate_number(value: &str) -> ValidationOutcome {
    let value = value.trim();
    if value.is_empty() {
        ValidationOutcome::invalid(REQUIRED)
    } else if !value.bytes().all(|b| b.is_ascii_digit()) {
        ValidationOutcome::invalid(DIGITS_ONLY)
    } else {
        ValidationOutcome::Valid
    }
}

/// State: exactly two uppercase letters A-Z
pub fn validate_state(value: &str) -> ValidationOutcome {
    if value.is_empty() {
        return ValidationOutcome::invalid(REQUIRED);
    }

    let bytes = value.as_bytes();
    if bytes.len() == 2 && bytes.iter().all(u8::is_ascii_uppercase) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(STATE_FORMAT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(message: &str) -> ValidationOutcome {
        ValidationOutcome::Invalid(message.to_string())
    }

    mod postal_code {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid() {
            assert_eq!(validate_postal_code("12345-678"), ValidationOutcome::Valid);
            assert_eq!(validate_postal_code("01310-100"), ValidationOutcome::Valid);
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_postal_code(""), invalid(REQUIRED));
        }

        #[test]
        fn test_missing_hyphen() {
            assert_eq!(validate_postal_code("12345678"), invalid(POSTAL_CODE_FORMAT));
        }

        #[test]
        fn test_wrong_shapes() {
            for value in ["123", "1234-5678", "12345-67", "12345-6789", "abcde-fgh", " 12345-678"] {
                assert_eq!(validate_postal_code(value), invalid(POSTAL_CODE_FORMAT), "{value:?}");
            }
        }

        #[test]
        fn test_whitespace_only_is_not_required() {
            assert_eq!(validate_postal_code("   "), invalid(POSTAL_CODE_FORMAT));
        }
    }

    mod street {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_too_short() {
            assert_eq!(validate_street("Av A"), invalid(STREET_TOO_SHORT));
        }

        #[test]
        fn test_valid() {
            assert_eq!(validate_street("Av Brasil"), ValidationOutcome::Valid);
            assert_eq!(validate_street("Rua 1"), ValidationOutcome::Valid);
        }

        #[test]
        fn test_blank_is_required() {
            assert_eq!(validate_street(""), invalid(REQUIRED));
            assert_eq!(validate_street("    "), invalid(REQUIRED));
        }

        #[test]
        fn test_length_counts_trimmed_characters() {
            assert_eq!(validate_street("  Av A  "), invalid(STREET_TOO_SHORT));
            assert_eq!(validate_street("Saúde"), ValidationOutcome::Valid);
        }
    }

    mod number {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid() {
            assert_eq!(validate_number("120"), ValidationOutcome::Valid);
            assert_eq!(validate_number(" 7 "), ValidationOutcome::Valid);
        }

        #[test]
        fn test_letters_rejected() {
            assert_eq!(validate_number("12a"), invalid(DIGITS_ONLY));
            assert_eq!(validate_number("1 2"), invalid(DIGITS_ONLY));
            assert_eq!(validate_number("-1"), invalid(DIGITS_ONLY));
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_number(""), invalid(REQUIRED));
        }
    }

    mod state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid() {
            assert_eq!(validate_state("SP"), ValidationOutcome::Valid);
        }

        #[test]
        fn test_lowercase_rejected() {
            assert_eq!(validate_state("sp"), invalid(STATE_FORMAT));
        }

        #[test]
        fn test_wrong_length_rejected() {
            assert_eq!(validate_state("SPX"), invalid(STATE_FORMAT));
            assert_eq!(validate_state("S"), invalid(STATE_FORMAT));
        }

        #[test]
        fn test_non_latin_rejected() {
            assert_eq!(validate_state("ÁB"), invalid(STATE_FORMAT));
            assert_eq!(validate_state("S1"), invalid(STATE_FORMAT));
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_state(""), invalid(REQUIRED));
        }
    }

    mod outcome {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_into_failure() {
            assert_eq!(ValidationOutcome::Valid.into_failure(FieldName::State), None);
            let failure = invalid(REQUIRED).into_failure(FieldName::Number).unwrap();
            assert_eq!(failure.field, FieldName::Number);
            assert_eq!(failure.to_string(), "Número: required");
        }

        #[test]
        fn test_dispatch() {
            assert_eq!(validate(FieldName::PostalCode, ""), invalid(REQUIRED));
            assert_eq!(validate(FieldName::Street, "Av Paulista"), ValidationOutcome::Valid);
            assert_eq!(validate(FieldName::Number, "x"), invalid(DIGITS_ONLY));
            assert_eq!(validate(FieldName::State, "RJ"), ValidationOutcome::Valid);
        }
    }
}
