//! Form field value objects

use super::formatters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while wiring fields by name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// The four fields of the address form, in submission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    PostalCode,
    Street,
    Number,
    State,
}

impl FieldName {
    /// Every field in the fixed order used for validation and error reporting
    pub const ALL: [FieldName; 4] = [
        FieldName::PostalCode,
        FieldName::Street,
        FieldName::Number,
        FieldName::State,
    ];

    /// Machine name, as used in config files and logs
    pub fn name(self) -> &'static str {
        match self {
            FieldName::PostalCode => "postal_code",
            FieldName::Street => "street",
            FieldName::Number => "number",
            FieldName::State => "state",
        }
    }

    /// Human label shown next to the field and in error reports
    pub fn label(self) -> &'static str {
        match self {
            FieldName::PostalCode => "CEP",
            FieldName::Street => "Logradouro",
            FieldName::Number => "Número",
            FieldName::State => "UF",
        }
    }

    /// Placeholder hint rendered while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            FieldName::PostalCode => "00000-000",
            FieldName::Street => "ex: Av Paulista",
            FieldName::Number => "ex: 1000",
            FieldName::State => "ex: SP, RJ",
        }
    }

    /// Position of the field in [`FieldName::ALL`]
    pub fn index(self) -> usize {
        match self {
            FieldName::PostalCode => 0,
            FieldName::Street => 1,
            FieldName::Number => 2,
            FieldName::State => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether surrounding whitespace is dropped before validation
    pub fn is_trimmed(self) -> bool {
        matches!(self, FieldName::Street | FieldName::Number)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// A single form field and its current displayed value
///
/// Every write goes through the field's formatter, so `value` always holds
/// what the user sees on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    /// Get the displayed value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Value as read at submit time (trimmed for street and number)
    pub fn submitted_value(&self) -> &str {
        if self.name.is_trimmed() {
            self.value.trim()
        } else {
            &self.value
        }
    }

    /// Replace the content with `raw`, applying the field's mask
    pub fn input(&mut self, raw: &str) -> &str {
        self.value = formatters::format(self.name, raw);
        &self.value
    }

    /// Append a typed character at the end of the field
    pub fn push_char(&mut self, c: char) -> &str {
        let mut raw = self.value.clone();
        raw.push(c);
        self.input(&raw)
    }

    /// Remove the last character from the field
    pub fn pop_char(&mut self) -> &str {
        let mut raw = self.value.clone();
        raw.pop();
        self.input(&raw)
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_name {
        use super::*;

        #[test]
        fn test_all_is_in_submission_order() {
            let names: Vec<&str> = FieldName::ALL.iter().map(|f| f.name()).collect();
            assert_eq!(names, ["postal_code", "street", "number", "state"]);
        }

        #[test]
        fn test_index_matches_position() {
            for (i, field) in FieldName::ALL.iter().enumerate() {
                assert_eq!(field.index(), i);
                assert_eq!(FieldName::from_index(i), Some(*field));
            }
            assert_eq!(FieldName::from_index(4), None);
        }

        #[test]
        fn test_parse_known_names() {
            assert_eq!("postal_code".parse(), Ok(FieldName::PostalCode));
            assert_eq!("state".parse(), Ok(FieldName::State));
        }

        #[test]
        fn test_parse_unknown_name_is_wiring_error() {
            let err = "cep".parse::<FieldName>().unwrap_err();
            assert_eq!(err, FieldError::UnknownField("cep".to_string()));
            assert_eq!(err.to_string(), "unknown form field: cep");
        }

        #[test]
        fn test_labels() {
            assert_eq!(FieldName::PostalCode.label(), "CEP");
            assert_eq!(FieldName::Street.label(), "Logradouro");
            assert_eq!(FieldName::Number.label(), "Número");
            assert_eq!(FieldName::State.label(), "UF");
        }

        #[test]
        fn test_serde_uses_machine_names() {
            let json = serde_json::to_string(&FieldName::PostalCode).unwrap();
            assert_eq!(json, "\"postal_code\"");
            let parsed: FieldName = serde_json::from_str("\"number\"").unwrap();
            assert_eq!(parsed, FieldName::Number);
        }
    }

    mod form_field {
        use super::*;

        #[test]
        fn test_new_is_empty() {
            let field = FormField::new(FieldName::Street);
            assert!(field.is_empty());
            assert_eq!(field.label(), "Logradouro");
        }

        #[test]
        fn test_typing_postal_code_inserts_hyphen() {
            let mut field = FormField::new(FieldName::PostalCode);
            for c in "01310100".chars() {
                field.push_char(c);
            }
            assert_eq!(field.as_text(), "01310-100");
        }

        #[test]
        fn test_typing_past_mask_is_ignored() {
            let mut field = FormField::new(FieldName::PostalCode);
            field.input("01310-100");
            assert_eq!(field.push_char('9'), "01310-100");
        }

        #[test]
        fn test_backspace_over_hyphen() {
            let mut field = FormField::new(FieldName::PostalCode);
            field.input("12345-6");
            assert_eq!(field.pop_char(), "12345");
            assert_eq!(field.pop_char(), "1234");
        }

        #[test]
        fn test_state_is_uppercased_while_typing() {
            let mut field = FormField::new(FieldName::State);
            field.push_char('s');
            assert_eq!(field.push_char('p'), "SP");
        }

        #[test]
        fn test_unmasked_field_keeps_raw_text() {
            let mut field = FormField::new(FieldName::Street);
            assert_eq!(field.input("  av brasil "), "  av brasil ");
        }

        #[test]
        fn test_submitted_value_trims_street_and_number_only() {
            let mut street = FormField::new(FieldName::Street);
            street.input("  Av Brasil ");
            assert_eq!(street.submitted_value(), "Av Brasil");

            let mut state = FormField::new(FieldName::State);
            state.input(" sp");
            assert_eq!(state.submitted_value(), " SP");
        }

        #[test]
        fn test_pop_on_empty_is_noop() {
            let mut field = FormField::new(FieldName::Number);
            assert_eq!(field.pop_char(), "");
        }

        #[test]
        fn test_clear() {
            let mut field = FormField::new(FieldName::Number);
            field.input("120");
            field.clear();
            assert!(field.is_empty());
        }
    }
}
